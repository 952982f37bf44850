//! In-memory `Platform` used by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, MutexGuard};

use crate::{Platform, Rect, Size, WindowResult};

#[derive(Debug, Clone)]
struct FakeWindow {
    handle: usize,
    title: String,
    visible: bool,
}

#[derive(Default)]
struct State {
    windows: Vec<FakeWindow>,
    monitors: Vec<Rect>,
    styles: HashMap<usize, u32>,
    placements: Vec<(usize, Rect)>,
    own_window: Option<usize>,
    fail_enumeration: bool,
    fail_placement: bool,
    fail_title: Vec<usize>,
}

pub(crate) struct FakePlatform {
    state: Mutex<State>,
    screen: Size,
    enumerations: AtomicUsize,
    gate: Mutex<Option<Receiver<()>>>,
}

impl FakePlatform {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            screen: Size::new(1920, 1080),
            enumerations: AtomicUsize::new(0),
            gate: Mutex::new(None),
        }
    }

    pub(crate) fn with_window(self, handle: usize, title: &str) -> Self {
        self.open(handle, title);
        self
    }

    pub(crate) fn with_hidden_window(self, handle: usize, title: &str) -> Self {
        self.open(handle, title);
        self.hide(handle);
        self
    }

    pub(crate) fn with_monitor(self, left: i32, top: i32, width: i32, height: i32) -> Self {
        self.state()
            .monitors
            .push(Rect::new(left, top, width, height));
        self
    }

    /// Adds the window hosting the process, e.g. its terminal.
    pub(crate) fn with_own_window(self, handle: usize, title: &str) -> Self {
        self.open(handle, title);
        self.state().own_window = Some(handle);
        self
    }

    /// Adds a window whose title cannot be read.
    pub(crate) fn with_unreadable_window(self, handle: usize) -> Self {
        self.open(handle, "Unreadable");
        self.state().fail_title.push(handle);
        self
    }

    /// Makes window enumeration fail.
    pub(crate) fn failing_enumeration(self) -> Self {
        self.state().fail_enumeration = true;
        self
    }

    /// Makes `set_window_pos` fail.
    pub(crate) fn failing_placement(self) -> Self {
        self.state().fail_placement = true;
        self
    }

    /// Blocks window enumeration until the returned sender fires (or drops).
    pub(crate) fn gated(self) -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        *self.gate.lock().unwrap() = Some(rx);
        (self, tx)
    }

    pub(crate) fn open(&self, handle: usize, title: &str) {
        let mut state = self.state();
        state.styles.insert(handle, 0x14CF_0000);
        state.windows.push(FakeWindow {
            handle,
            title: title.to_string(),
            visible: true,
        });
    }

    pub(crate) fn hide(&self, handle: usize) {
        for window in self.state().windows.iter_mut() {
            if window.handle == handle {
                window.visible = false;
            }
        }
    }

    /// Destroys a window: it stops being enumerated or visible.
    pub(crate) fn close(&self, handle: usize) {
        self.state().windows.retain(|w| w.handle != handle);
    }

    pub(crate) fn enumerations(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }

    pub(crate) fn placements(&self) -> Vec<(usize, Rect)> {
        self.state().placements.clone()
    }

    pub(crate) fn style_of(&self, handle: usize) -> Option<u32> {
        self.state().styles.get(&handle).copied()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn find(&self, handle: usize) -> Option<FakeWindow> {
        self.state()
            .windows
            .iter()
            .find(|w| w.handle == handle)
            .cloned()
    }
}

impl Platform for FakePlatform {
    fn enumerate_windows(&self) -> WindowResult<Vec<usize>> {
        self.enumerations.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = self.gate.lock().unwrap().take() {
            let _ = gate.recv();
        }

        let state = self.state();
        if state.fail_enumeration {
            return Err("enumeration failed".into());
        }
        Ok(state.windows.iter().map(|w| w.handle).collect())
    }

    fn window_title(&self, handle: usize) -> WindowResult<String> {
        if self.state().fail_title.contains(&handle) {
            return Err("GetWindowTextW failed".into());
        }
        self.find(handle)
            .map(|w| w.title)
            .ok_or_else(|| "invalid window handle".into())
    }

    fn is_window_visible(&self, handle: usize) -> bool {
        self.find(handle).is_some_and(|w| w.visible)
    }

    fn enumerate_monitors(&self) -> WindowResult<Vec<Rect>> {
        Ok(self.state().monitors.clone())
    }

    fn window_style(&self, handle: usize) -> WindowResult<u32> {
        self.state()
            .styles
            .get(&handle)
            .copied()
            .ok_or_else(|| "invalid window handle".into())
    }

    fn set_window_style(&self, handle: usize, style: u32) -> WindowResult<()> {
        self.state().styles.insert(handle, style);
        Ok(())
    }

    fn set_window_pos(&self, handle: usize, rect: &Rect) -> WindowResult<()> {
        let mut state = self.state();
        if state.fail_placement {
            return Err("SetWindowPos failed".into());
        }
        state.placements.push((handle, *rect));
        Ok(())
    }

    fn primary_screen_size(&self) -> Size {
        self.screen
    }

    fn set_own_title(&self, title: &str) -> WindowResult<()> {
        let mut state = self.state();
        let handle = state.own_window.ok_or("no console attached")?;
        for window in state.windows.iter_mut().filter(|w| w.handle == handle) {
            window.title = title.to_string();
        }
        Ok(())
    }
}
