//! Picker application state and main loop
//!
//! The app owns the color model, the trace log and the dialog queue. Each
//! frame the UI reports at most one [`UiAction`], which is applied here and
//! followed by a re-render of the text fields.

mod init;

pub use init::AppError;

use std::collections::VecDeque;

use eframe::egui;

use colorpicker_core::{Channel, ColorState, Config, Mode, Notice, TraceLog};

use crate::ui::{PickerUi, UiAction, show_notice, show_trace_window};

/// Whether the app keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Color picker application state
pub struct App {
    /// Settings from config.toml and the command line
    config: Config,
    /// The color being picked
    state: ColorState,
    /// Text field buffers
    picker_ui: PickerUi,
    /// Development trace, shown when enabled
    trace: TraceLog,
    /// Dialogs waiting to be shown, oldest first
    notices: VecDeque<Notice>,
}

impl App {
    /// Create the app showing black in `mode`.
    pub fn new(config: Config, mode: Mode) -> Self {
        let state = ColorState::new(mode);
        let trace = TraceLog::new(config.trace.enabled, config.trace.capacity);

        Self {
            picker_ui: PickerUi::new(&state),
            state,
            trace,
            notices: VecDeque::new(),
            config,
        }
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn picker_ui(&self) -> &PickerUi {
        &self.picker_ui
    }

    pub fn trace(&self) -> &TraceLog {
        &self.trace
    }

    /// Queue a dialog.
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    /// The dialog currently shown, if any.
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Apply one UI action to the model.
    pub fn handle_ui_action(&mut self, action: UiAction) -> Flow {
        match action {
            UiAction::SetChannel(channel, value) => {
                self.state.set_channel(channel, i32::from(value));
                self.picker_ui.sync(&self.state);
            }
            UiAction::Submit { field, text } => self.read_text(field, &text),
            UiAction::ToggleMode => {
                self.trace.enter("toggle_mode");
                self.state.toggle_mode();
                tracing::info!("Switched to {} mode", self.state.mode().title());
                self.picker_ui.sync(&self.state);
                self.trace.exit("toggle_mode");
            }
            UiAction::ClearTrace => self.trace.clear(),
            UiAction::CloseTrace => {
                tracing::debug!("Trace window closed");
                self.trace.set_enabled(false);
            }
            UiAction::DismissNotice => {
                self.notices.pop_front();
            }
            UiAction::Exit => {
                tracing::info!("Exiting");
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Apply text entered in `field`.
    ///
    /// Invalid numbers leave the color as it was. In strict mode the field is
    /// also highlighted and a dialog is queued.
    fn read_text(&mut self, field: Channel, text: &str) {
        self.trace.enter("read_text");
        self.picker_ui.clear_invalid(field);

        match self.state.submit(text, field) {
            Ok(value) => {
                tracing::debug!("{} field accepted {}", field, value);
                self.picker_ui.sync(&self.state);
            }
            Err(e) => {
                tracing::debug!("Ignoring input: {}", e);
                self.trace
                    .message(format!("Error converting {} to an integer", text));
                self.picker_ui.sync(&self.state);

                if self.config.input.strict {
                    self.picker_ui.mark_invalid(field);
                    self.push_notice(
                        Notice::error(format!("{} is not a valid color", text))
                            .with_title("Input Error"),
                    );
                }
            }
        }

        self.trace.exit("read_text");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut ui_action = self.picker_ui.show(ctx, &self.state);

        if self.trace.is_enabled()
            && let Some(action) = show_trace_window(ctx, &self.trace)
        {
            ui_action = Some(action);
        }

        if let Some(notice) = self.notices.front()
            && let Some(action) = show_notice(ctx, notice)
        {
            ui_action = Some(action);
        }

        if let Some(action) = ui_action
            && self.handle_ui_action(action) == Flow::Exit
        {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Run the picker window until it is closed.
///
/// `notices` are shown as dialogs once the window is up.
pub fn run(config: Config, mode: Mode, notices: Vec<Notice>) -> Result<(), AppError> {
    tracing::info!("Starting Color Picker in {} mode", mode.title());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Color Picker Application")
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Color Picker",
        native_options,
        Box::new(move |_cc| {
            let mut app = App::new(config, mode);
            for notice in notices {
                app.push_notice(notice);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| AppError::EventLoop(format!("eframe error: {}", e)))?;

    Ok(())
}
