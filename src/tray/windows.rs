//! Windows system tray implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, error, info};
use tray_icon::{
    menu::{Menu, MenuEvent, MenuItem},
    TrayIcon, TrayIconBuilder,
};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::error::TrayError;
use crate::notifications;

/// Menu item IDs
mod menu_ids {
    pub const EXIT: &str = "exit";
}

/// Application state for the tray icon
struct TrayApp {
    tray_icon: Option<TrayIcon>,
    running: Arc<AtomicBool>,
    notified: bool,
}

impl TrayApp {
    fn new() -> Self {
        Self {
            tray_icon: None,
            running: Arc::new(AtomicBool::new(true)),
            notified: false,
        }
    }

    fn create_menu(&self) -> Result<Menu> {
        let menu = Menu::new();

        let exit_item = MenuItem::with_id(menu_ids::EXIT, super::EXIT_LABEL, true, None);
        menu.append(&exit_item)?;

        Ok(menu)
    }

    fn create_icon(&self) -> Result<tray_icon::Icon> {
        // Plain generated glyph; the utility ships no icon asset.
        const SIZE: u32 = 32;
        const MARGIN: u32 = 4;

        let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
        for y in 0..SIZE {
            for x in 0..SIZE {
                let inside =
                    x >= MARGIN && x < SIZE - MARGIN && y >= MARGIN && y < SIZE - MARGIN;
                if inside {
                    rgba.extend_from_slice(&[0x2f, 0x6f, 0xed, 0xff]);
                } else {
                    rgba.extend_from_slice(&[0, 0, 0, 0]);
                }
            }
        }

        let icon = tray_icon::Icon::from_rgba(rgba, SIZE, SIZE)
            .map_err(|e| anyhow::anyhow!("failed to create icon: {}", e))?;

        Ok(icon)
    }

    fn handle_menu_event(&self, event: MenuEvent) {
        match event.id.0.as_str() {
            menu_ids::EXIT => {
                info!("exit requested from tray menu");
                self.running.store(false, Ordering::SeqCst);
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for TrayApp {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Create tray icon on first resume
        if self.tray_icon.is_none() {
            let menu = match self.create_menu() {
                Ok(m) => m,
                Err(e) => {
                    error!(error = %e, "failed to create tray menu");
                    self.running.store(false, Ordering::SeqCst);
                    return;
                }
            };

            let icon = match self.create_icon() {
                Ok(i) => i,
                Err(e) => {
                    error!(error = %e, "failed to create tray glyph");
                    self.running.store(false, Ordering::SeqCst);
                    return;
                }
            };

            let tray_icon = TrayIconBuilder::new()
                .with_menu(Box::new(menu))
                .with_tooltip(super::TOOLTIP)
                .with_icon(icon)
                .build();

            match tray_icon {
                Ok(ti) => {
                    self.tray_icon = Some(ti);
                    debug!("tray icon created");
                }
                Err(e) => {
                    // No tray in this session; nothing meaningful can be
                    // shown, so leave quietly.
                    error!(error = %e, "failed to create tray icon");
                    self.running.store(false, Ordering::SeqCst);
                    return;
                }
            }
        }

        if !self.notified {
            notifications::notify_started();
            self.notified = true;
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        _event: WindowEvent,
    ) {
        // We don't have any windows, just the tray icon
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Process menu events
        if let Ok(event) = MenuEvent::receiver().try_recv() {
            self.handle_menu_event(event);
        }

        // The Exit entry (or a startup failure) flips `running`
        if !self.running.load(Ordering::SeqCst) {
            event_loop.exit();
        }

        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

/// Run the tray event loop until Exit is chosen.
pub fn run_tray() -> Result<(), TrayError> {
    let event_loop = EventLoop::new().map_err(|e| {
        debug!(error = %e, "no event loop for this session");
        TrayError::Unavailable
    })?;

    let mut app = TrayApp::new();
    event_loop
        .run_app(&mut app)
        .map_err(|e| TrayError::EventLoop(e.to_string()))?;

    Ok(())
}
