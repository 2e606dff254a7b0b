// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap() = text;
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn matchday_done(&mut self, matchday: u32) {
        self.done += 1;
        self.set_status(format!("Scraped matchday {matchday}"));
    }
    fn finish(&mut self, total: usize) {
        if total == 0 {
            self.set_status(s!("No played matchdays yet"));
        } else {
            self.set_status(format!("Scrape complete ({total} matchdays)"));
        }
    }
}
