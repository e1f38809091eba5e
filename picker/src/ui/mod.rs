//! egui picker UI
//!
//! Draws the mode/exit buttons, the color swatch and the channel grid, and
//! turns user input into [`UiAction`]s for the application to apply.

mod notice;
mod trace_window;

pub use notice::show_notice;
pub use trace_window::show_trace_window;

use eframe::egui;

use colorpicker_core::{Channel, ColorState, Mode};

/// Slider track colors, in channel order.
const CHANNEL_COLORS: [egui::Color32; 3] = [
    egui::Color32::RED,
    egui::Color32::GREEN,
    egui::Color32::BLUE,
];

/// Background of a field holding rejected input.
const INVALID_FIELD: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);

/// Editable text for the three channel fields.
///
/// The buffers hold what the user is typing. They are overwritten from the
/// model with [`PickerUi::sync`] after every change to the color.
pub struct PickerUi {
    fields: [String; 3],
    invalid: [bool; 3],
}

impl PickerUi {
    /// Create the UI with fields showing `state`.
    pub fn new(state: &ColorState) -> Self {
        let mut ui = Self {
            fields: Default::default(),
            invalid: [false; 3],
        };
        ui.sync(state);
        ui
    }

    /// Re-render every field from the model.
    ///
    /// Hex mode puts the packed value in the green field and blanks the
    /// other two.
    pub fn sync(&mut self, state: &ColorState) {
        let strings = state.display_strings();
        match state.mode() {
            Mode::Decimal => {
                for (field, text) in self.fields.iter_mut().zip(strings) {
                    *field = text;
                }
            }
            Mode::Hex => {
                self.fields = [
                    String::new(),
                    strings.into_iter().next().unwrap_or_default(),
                    String::new(),
                ];
            }
        }
    }

    pub fn field_text(&self, channel: Channel) -> &str {
        &self.fields[field_index(channel)]
    }

    pub fn is_invalid(&self, channel: Channel) -> bool {
        self.invalid[field_index(channel)]
    }

    /// Highlight a field and clear its text.
    pub fn mark_invalid(&mut self, channel: Channel) {
        let index = field_index(channel);
        self.invalid[index] = true;
        self.fields[index].clear();
    }

    pub fn clear_invalid(&mut self, channel: Channel) {
        self.invalid[field_index(channel)] = false;
    }

    /// Renders the picker and returns any user action.
    pub fn show(&mut self, ctx: &egui::Context, state: &ColorState) -> Option<UiAction> {
        let mut action = None;

        egui::TopBottomPanel::top("mode_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(state.mode().toggle_label()).clicked() {
                    action = Some(UiAction::ToggleMode);
                }
                if ui.button("Exit").clicked() {
                    action = Some(UiAction::Exit);
                }
            });
        });

        egui::TopBottomPanel::bottom("color_control").show(ctx, |ui| {
            ui.group(|ui| {
                ui.label(egui::RichText::new(state.mode().title()).strong());

                egui::Grid::new("channel_grid")
                    .num_columns(2)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        for channel in Channel::ALL {
                            if let Some(a) = self.field(ui, state, channel) {
                                action = Some(a);
                            }
                            if let Some(a) = channel_slider(ui, state, channel) {
                                action = Some(a);
                            }
                            ui.end_row();
                        }
                    });
            });
        });

        let [r, g, b] = state.rgb();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(r, g, b)))
            .show(ctx, |_ui| {});

        action
    }

    /// One text field. Enter submits it.
    fn field(
        &mut self,
        ui: &mut egui::Ui,
        state: &ColorState,
        channel: Channel,
    ) -> Option<UiAction> {
        let index = field_index(channel);
        let editable = field_editable(state.mode(), channel);

        let mut edit = egui::TextEdit::singleline(&mut self.fields[index])
            .desired_width(90.0)
            .interactive(editable);
        if self.invalid[index] {
            edit = edit.background_color(INVALID_FIELD);
        }

        let response = ui.add(edit).on_hover_text(channel.label());
        if editable && response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            return Some(UiAction::Submit {
                field: channel,
                text: self.fields[index].clone(),
            });
        }
        None
    }
}

fn channel_slider(ui: &mut egui::Ui, state: &ColorState, channel: Channel) -> Option<UiAction> {
    let mut value = state.channel(channel);

    let changed = ui
        .scope(|ui| {
            ui.visuals_mut().selection.bg_fill = CHANNEL_COLORS[field_index(channel)];
            ui.spacing_mut().slider_width = 160.0;
            ui.add(
                egui::Slider::new(&mut value, 0..=255)
                    .show_value(false)
                    .trailing_fill(true),
            )
            .changed()
        })
        .inner;

    changed.then_some(UiAction::SetChannel(channel, value))
}

/// Only the green field takes input in hex mode; it holds the packed value.
fn field_editable(mode: Mode, channel: Channel) -> bool {
    mode == Mode::Decimal || channel == Channel::Green
}

fn field_index(channel: Channel) -> usize {
    match channel {
        Channel::Red => 0,
        Channel::Green => 1,
        Channel::Blue => 2,
    }
}

/// Actions the user can trigger from the picker window.
///
/// Returned by [`PickerUi::show`] and the dialog helpers; applied by the
/// application.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// A slider moved
    SetChannel(Channel, u8),
    /// Enter was pressed in a text field
    Submit { field: Channel, text: String },
    /// Switch between decimal and hex
    ToggleMode,
    /// Close the picker
    Exit,
    /// Empty the trace window
    ClearTrace,
    /// The trace window was closed; stop tracing
    CloseTrace,
    /// Close the dialog currently shown
    DismissNotice,
}
