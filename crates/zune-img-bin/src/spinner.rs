/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A cosmetic progress indicator
//!
//! The spinner runs on its own thread and only shares a single flag with
//! whoever started it, it never sees the pixels being worked on.
use std::io::{stdout, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::trace;

const SPINNER_CHARS: [char; 4] = ['|', '/', '-', '\\'];
/// How long each character stays on screen
const FRAME_TIME: Duration = Duration::from_millis(650);
/// How often the running flag is polled while a character is shown
const POLL_TIME: Duration = Duration::from_millis(25);

pub struct Spinner {
    running: Arc<AtomicBool>,
    handle:  Option<JoinHandle<()>>
}

impl Spinner {
    /// Print `text` and start spinning after it
    ///
    /// Nothing is drawn when standard output is not a terminal.
    pub fn start(text: &str) -> Spinner {
        let running = Arc::new(AtomicBool::new(true));

        if !stdout().is_terminal() {
            trace!("Standard output is not a terminal, not drawing a spinner");
            return Spinner {
                running,
                handle: None
            };
        }
        let mut out = stdout();
        let _ = write!(out, "{text} ");
        let _ = out.flush();

        let flag = Arc::clone(&running);
        let handle = thread::Builder::new()
            .name("spinner".to_string())
            .spawn(move || spin(&flag))
            .ok();

        Spinner { running, handle }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stop the spinner and wait for its thread to finish
    pub fn stop(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.running.store(false, Ordering::Relaxed);

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            let mut out = stdout();
            let _ = writeln!(out, "\x08 ");
            let _ = out.flush();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}

fn spin(running: &AtomicBool) {
    let mut out = stdout();
    let polls = (FRAME_TIME.as_millis() / POLL_TIME.as_millis()).max(1);

    for c in SPINNER_CHARS.iter().cycle() {
        if !running.load(Ordering::Relaxed) {
            break;
        }
        let _ = write!(out, "\x08{c}");
        let _ = out.flush();

        for _ in 0..polls {
            if !running.load(Ordering::Relaxed) {
                return;
            }
            thread::sleep(POLL_TIME);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    use crate::spinner::{spin, Spinner};

    #[test]
    fn test_stop_clears_flag() {
        let spinner = Spinner::start("testing");
        assert!(spinner.is_running());
        spinner.stop();
    }

    #[test]
    fn test_spin_exits_once_flag_is_cleared() {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = thread::spawn(move || spin(&flag));
        running.store(false, Ordering::Relaxed);

        handle.join().unwrap();
    }

    #[test]
    fn test_spin_returns_immediately_when_stopped() {
        spin(&AtomicBool::new(false));
    }
}
