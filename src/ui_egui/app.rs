mod day_list;
mod lifecycle;
mod sidebar;

use crate::models::settings::Settings;
use crate::services::id::IdGenerator;
use crate::services::store::CalendarStore;
use crate::ui_egui::event_dialog::{render_event_dialog, EventDialogState};
use chrono::Local;

const SIDEBAR_DEFAULT_WIDTH: f32 = 180.0;

pub struct CalendarApp {
    /// Owner of events, label filters and modal visibility
    store: CalendarStore,
    settings: Settings,
    ids: IdGenerator,
    /// Live form while the modal is shown
    event_dialog_state: Option<EventDialogState>,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("label_sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .resizable(true)
            .show(ctx, |ui| self.render_sidebar(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.render_day_list(ui));

        self.render_event_modal(ctx);
    }
}

impl CalendarApp {
    fn render_event_modal(&mut self, ctx: &egui::Context) {
        if self.store.show_event_modal() && self.event_dialog_state.is_none() {
            self.event_dialog_state = Some(EventDialogState::open(
                self.store.selected_day(),
                self.store.selected_event(),
                Local::now().time(),
                &self.settings,
            ));
        }

        let Some(state) = self.event_dialog_state.as_mut() else {
            return;
        };

        let result = render_event_dialog(ctx, state, &mut self.store, &self.ids);
        if let Some(kind) = result.dispatched {
            log::debug!("Event dialog dispatched {:?}", kind);
        }
        if result.closed {
            self.event_dialog_state = None;
        }
    }
}
