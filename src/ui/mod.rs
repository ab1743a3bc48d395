mod helpers;
pub mod layout;
pub mod views;

use crate::app::AcademyApp;
use crate::model::AppState;
use crate::progress::storage;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for AcademyApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.tick(now);

        top_panel(self, ctx);
        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match &self.state {
            AppState::Library => views::library::ui_library(self, ctx),
            AppState::SkillTree => views::skill_tree::ui_skill_tree(self, ctx),
            AppState::Topic(id) => {
                let id = id.clone();
                views::topic::ui_topic(self, ctx, &id)
            }
            AppState::Lesson => views::lesson::ui_lesson(self, ctx),
        }

        if self.profile_open {
            views::profile::ui_profile(self, ctx);
        }
        views::profile::ui_completion_modal(self, ctx, now);
        if self.confirm_reset {
            self.confirm_reset(ctx);
        }

        // Guardado inmediato tras cada mutación del progreso
        if let Some(target) = frame.storage_mut() {
            self.persist_to(target);
        }

        if self.needs_timer_repaint() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    fn save(&mut self, target: &mut dyn eframe::Storage) {
        storage::save_state(target, self.store.state());
    }
}
