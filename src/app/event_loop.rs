use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::model::hash_bytes;
use crate::app::{App, Message, Model, ToastLevel, update};
use crate::watcher::FileWatcher;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        // Load the buffer before taking over the terminal.
        let read_scope = crate::perf::scope("app.read_file");
        let (text, disk_hash, missing_file) = match &self.file_path {
            Some(path) if path.exists() => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let hash = hash_bytes(&bytes);
                let text = String::from_utf8(bytes)
                    .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
                (text, Some(hash), false)
            }
            Some(_) => (String::new(), None, true),
            None => (String::new(), None, false),
        };
        drop(read_scope);

        // Initialize terminal
        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — mdpane requires an interactive terminal")?;
        let size = terminal.size()?;
        drop(init_scope);

        let mut model = Model::new(self.file_path.clone(), &text, (size.width, size.height));
        model.disk_hash = disk_hash;
        model.watch_enabled = self.watch_enabled;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        if !self.preview_visible {
            model = update(model, Message::TogglePreview);
        }
        if missing_file {
            model.show_toast(
                ToastLevel::Info,
                format!("New file: {}", model.display_name()),
            );
        }

        crate::perf::log_event(
            "init.layout",
            format!(
                "terminal={}x{} preview_visible={} wrap_width={}",
                size.width,
                size.height,
                model.preview_visible,
                model.preview_layout_width()
            ),
        );

        let _ = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste);

        // Main loop
        let result = Self::event_loop(&mut terminal, &mut model);

        // Restore terminal
        let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut file_watcher = Self::try_make_watcher(model);
        let mut watched_path = model.file_path.clone();
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            // (Re)create the watcher when watching was just enabled or the
            // bound file appeared (e.g. first save of a new file).
            if model.watch_enabled && (file_watcher.is_none() || model.file_path != watched_path) {
                file_watcher = Self::try_make_watcher(model);
                watched_path.clone_from(&model.file_path);
            }
            if !model.watch_enabled && file_watcher.is_some() {
                file_watcher = None;
            }

            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                crate::perf::log_event(
                    "event.resize.apply",
                    format!("frame={frame_idx} width={width} height={height}"),
                );
                *model = update(std::mem::take(model), Message::Resize(width, height));
                needs_render = true;
            }

            if model.watch_enabled
                && file_watcher
                    .as_mut()
                    .is_some_and(FileWatcher::take_change_ready)
            {
                *model = update(std::mem::take(model), Message::FileChanged);
                Self::handle_message_side_effects(model, &Message::FileChanged);
                needs_render = true;
            }

            // Handle events
            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Refresh timestamp after the poll wait so the debouncer
                // uses accurate times.
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                let msg =
                    Self::handle_event(&event::read()?, model, event_ms, &mut resize_debouncer);
                if let Some(msg) = msg {
                    crate::perf::log_event("event.message", format!("frame={frame_idx} msg={msg:?}"));
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    Self::handle_message_side_effects(model, &side_msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    let msg =
                        Self::handle_event(&event::read()?, model, drain_ms, &mut resize_debouncer);
                    if let Some(msg) = msg {
                        drained += 1;
                        let side_msg = msg.clone();
                        *model = update(std::mem::take(model), msg);
                        Self::handle_message_side_effects(model, &side_msg);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    crate::perf::log_event(
                        "event.drain",
                        format!("frame={frame_idx} drained={drained}"),
                    );
                }
            }

            if needs_render {
                frame_idx += 1;

                // Derive the preview from the buffer and highlight the
                // visible range before drawing.
                let prep_start = Instant::now();
                model.refresh_preview();
                let range = model.viewport.visible_range();
                let overscan = model.viewport.height() as usize;
                model.preview.ensure_highlight_for_range(
                    range.start.saturating_sub(overscan)..range.end + overscan,
                );
                crate::perf::log_event(
                    "frame.prep",
                    format!(
                        "frame={} prep_ms={:.3} viewport={}..{}",
                        frame_idx,
                        prep_start.elapsed().as_secs_f64() * 1000.0,
                        range.start,
                        range.end,
                    ),
                );

                // Render
                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                crate::perf::log_event(
                    "frame.draw",
                    format!(
                        "frame={} draw_ms={:.3}",
                        frame_idx,
                        draw_start.elapsed().as_secs_f64() * 1000.0
                    ),
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn try_make_watcher(model: &mut Model) -> Option<FileWatcher> {
        if !model.watch_enabled {
            return None;
        }
        let path = model.file_path.clone()?;
        if !path.exists() {
            return None;
        }
        match FileWatcher::new(&path, Duration::from_millis(200)) {
            Ok(watcher) => Some(watcher),
            Err(err) => {
                model.watch_enabled = false;
                model.show_toast(ToastLevel::Warning, format!("Watch unavailable: {err}"));
                crate::perf::log_event(
                    "watcher.error",
                    format!("failed path={} err={err}", path.display()),
                );
                None
            }
        }
    }
}
