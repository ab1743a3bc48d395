//! Vistas de los mini-juegos. Solo pintan y traducen clics; las reglas
//! viven en `crate::interactives`.

use crate::app::AcademyApp;
use crate::interactives::MiniGame;
use crate::interactives::chat_simulation::{ChatOutcome, ChatSimulation};
use crate::interactives::crypto_scanner::CryptoScanner;
use crate::interactives::password_builder::{PasswordBuilder, StrengthBand};
use crate::interactives::term_sorter::{Bucket, DropFeedback, TermSorter};
use crate::interactives::totp_simulator::TotpSimulator;
use crate::interactives::wifi_simulator::{WifiFeedback, WifiSimulator};
use crate::ui::helpers::feedback_box;
use crate::ui::layout::two_button_row;
use eframe::egui::{self, Color32, RichText, Ui};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

pub fn ui_interactive(app: &mut AcademyApp, ui: &mut Ui, can_go_previous: bool) {
    let now = ui.input(|i| i.time);
    let AcademyApp {
        active_game,
        cm_cache,
        ..
    } = &mut *app;
    let Some(active) = active_game.as_mut() else {
        return;
    };

    if active.already_completed {
        feedback_box(ui, true, "✅ Ya superaste este ejercicio");
        ui.add_space(8.0);
    }

    egui::ScrollArea::vertical()
        .max_height(420.0)
        .show(ui, |ui| match &mut active.game {
            MiniGame::PasswordBuilder(g) => password_builder(ui, g),
            MiniGame::TermSorter(g) => term_sorter(ui, g),
            MiniGame::ChatSimulation(g) => chat_simulation(ui, g, cm_cache, now),
            MiniGame::WifiSimulator(g) => wifi_simulator(ui, g),
            MiniGame::CryptoScanner(g) => crypto_scanner(ui, g),
            MiniGame::TotpSimulator(g) => totp_simulator(ui, g, now),
        });

    ui.add_space(12.0);
    let can_complete = active.can_complete();
    let next_label = if can_complete {
        "Siguiente ➡"
    } else {
        "🔒 Completa el ejercicio"
    };
    let width = ui.available_width();
    let (back, next) = two_button_row(
        ui,
        width,
        ("⬅ Atrás", can_go_previous),
        (next_label, can_complete),
    );
    let restart = ui
        .small_button("⟲ Reiniciar ejercicio")
        .on_hover_text("Vuelve a empezar esta tarea")
        .clicked();

    if back {
        app.previous_slide();
    } else if next {
        app.complete_interactive();
    } else if restart {
        app.restart_active_game();
    }
}

fn password_builder(ui: &mut Ui, game: &mut PasswordBuilder) {
    ui.add(
        egui::TextEdit::singleline(game.password_mut())
            .hint_text("palabra-palabra-palabra-palabra")
            .desired_width(f32::INFINITY),
    );
    let score = game.strength();
    let (color, text) = match game.band() {
        StrengthBand::Weak => (Color32::from_rgb(248, 113, 113), "Débil"),
        StrengthBand::Medium => (Color32::from_rgb(250, 204, 21), "Media"),
        StrengthBand::Strong => (Color32::from_rgb(52, 211, 153), "Fuerte"),
    };
    ui.add(
        egui::ProgressBar::new(score as f32 / 100.0)
            .fill(color)
            .text(format!("{text} ({score}/100)")),
    );

    let check = |ok: bool| if ok { "✅" } else { "⬜" };
    ui.label(format!("{} Más de 20 caracteres o 3+ palabras", check(game.meets_length_hint())));
    ui.label(format!("{} Alguna mayúscula", check(game.has_uppercase())));
    ui.label(format!("{} Algún símbolo (!@#$%^&*)", check(game.has_special())));

    if game.is_solved() {
        feedback_box(ui, true, "¡Contraseña imbatible!");
    }
}

fn term_sorter(ui: &mut Ui, game: &mut TermSorter) {
    let safe = game.label(Bucket::Safe).to_string();
    let unsafe_ = game.label(Bucket::Unsafe).to_string();

    let mut moved: Option<(String, Bucket)> = None;
    for item in game.pending() {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&item.content).monospace());
            if ui.button(format!("→ {safe}")).clicked() {
                moved = Some((item.id.clone(), Bucket::Safe));
            }
            if ui.button(format!("→ {unsafe_}")).clicked() {
                moved = Some((item.id.clone(), Bucket::Unsafe));
            }
        });
    }
    if let Some((id, bucket)) = moved {
        game.drop_item(&id, bucket);
    }

    match game.last_feedback() {
        Some(DropFeedback::Wrong) => feedback_box(ui, false, "Ese no va ahí. Inténtalo otra vez."),
        Some(DropFeedback::Correct) if game.is_solved() => {
            feedback_box(ui, true, "¡Todo clasificado!")
        }
        _ => {}
    }

    ui.add_space(8.0);
    ui.columns(2, |cols| {
        for (col, bucket, title) in [(0, Bucket::Safe, &safe), (1, Bucket::Unsafe, &unsafe_)] {
            cols[col].label(RichText::new(title).strong());
            for item in game.sorted(bucket) {
                cols[col].label(RichText::new(&item.content).monospace());
            }
        }
    });
}

fn chat_simulation(ui: &mut Ui, game: &mut ChatSimulation, cache: &mut CommonMarkCache, now: f64) {
    let header = game.header();
    ui.horizontal(|ui| {
        ui.label(RichText::new(&header.title).strong());
        if header.verified {
            ui.label("✔");
        }
        ui.label(RichText::new(&header.subtitle).weak());
    });
    ui.separator();

    for msg in game.transcript() {
        if msg.is_system() {
            ui.vertical_centered(|ui| ui.label(RichText::new(&msg.text).italics()));
        } else if msg.is_mine() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                ui.label(RichText::new(&msg.text).color(Color32::from_rgb(96, 165, 250)));
            });
        } else {
            ui.label(format!("{}: {}", msg.sender, msg.text));
        }
    }
    if game.is_typing() {
        ui.label(RichText::new("escribiendo…").weak());
    }
    ui.separator();

    if game.can_choose() {
        ui.label("¿Qué haces?");
        let mut chosen = None;
        for (i, option) in game.options().iter().enumerate() {
            if ui.button(option.text.as_str()).clicked() {
                chosen = Some(i);
            }
        }
        if let Some(i) = chosen {
            game.choose(i, now);
        }
    }

    match game.outcome() {
        Some(ChatOutcome::Safe) => feedback_box(ui, true, "¡Bien! Has detectado el peligro."),
        Some(ChatOutcome::Hacked) => {
            feedback_box(ui, false, "¡Cuidado! Vuelve a intentarlo para continuar.");
            if ui.button("⟲ Intentar de nuevo").clicked() {
                game.retry();
            }
        }
        None => {}
    }

    if game.show_explanation {
        let explanation = game
            .selected_option()
            .map(|o| o.explanation.clone())
            .unwrap_or_default();
        let mut open = true;
        egui::Window::new("Explicación")
            .collapsible(false)
            .open(&mut open)
            .show(ui.ctx(), |ui| {
                CommonMarkViewer::new().show(ui, cache, &explanation);
            });
        if !open {
            game.show_explanation = false;
        }
    }
}

fn wifi_simulator(ui: &mut Ui, game: &mut WifiSimulator) {
    ui.horizontal(|ui| {
        let vpn = if game.vpn_enabled {
            "🛡 VPN ACTIVADA"
        } else {
            "🛡 VPN desactivada"
        };
        if ui.selectable_label(game.vpn_enabled, vpn).clicked() {
            game.toggle_vpn();
        }
        if ui.selectable_label(game.scan_mode, "📡 Escáner").clicked() {
            game.toggle_scan();
        }
    });
    ui.add_space(6.0);

    let mut connect = None;
    for net in game.networks() {
        let detail = if game.scan_mode {
            format!("MAC: {} · {}", net.bssid, net.security)
        } else if net.secured {
            "🔒 Protegida".to_string()
        } else {
            "Red abierta".to_string()
        };
        let selected = game.selected() == Some(net.id);
        if ui
            .selectable_label(selected, format!("📶 {}   {}", net.ssid, detail))
            .clicked()
        {
            connect = Some(net.id);
        }
    }
    if let Some(id) = connect {
        game.connect(id);
    }

    match game.feedback() {
        Some(WifiFeedback::Success) => feedback_box(ui, true, "Conexión cifrada por la VPN. ¡Perfecto!"),
        Some(WifiFeedback::Warning) => feedback_box(
            ui,
            true,
            "La red tiene contraseña, pero con VPN estarías más seguro.",
        ),
        Some(WifiFeedback::Error) => {
            feedback_box(
                ui,
                false,
                "¡Red abierta! Un atacante ha interceptado tus contraseñas. Activa la VPN en las cafeterías.",
            );
            if ui.button("Intentar de nuevo").clicked() {
                game.dismiss_error();
            }
        }
        None => {}
    }
}

fn crypto_scanner(ui: &mut Ui, game: &mut CryptoScanner) {
    let mut pick = None;
    for token in game.tokens() {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&token.symbol).strong());
                ui.label(token.name.as_str());
            });
            ui.label(RichText::new(&token.address).monospace().small());
            ui.label(format!("Holders: {}", token.holders));
            if ui.button("Elegir este").clicked() {
                pick = Some(token.id);
            }
        });
    }
    if let Some(id) = pick {
        game.select(id);
    }

    if game.is_solved() {
        feedback_box(
            ui,
            true,
            "¡Correcto! Comprueba siempre la dirección del contrato y el número de holders.",
        );
    } else if game.picked_scam() {
        feedback_box(
            ui,
            false,
            "¡Cuidado! Es un token estafa: dirección sospechosa y pocos holders.",
        );
    }
}

fn totp_simulator(ui: &mut Ui, game: &mut TotpSimulator, now: f64) {
    if game.is_solved() {
        feedback_box(
            ui,
            true,
            "¡A tiempo! Estos códigos solo viven 30 segundos, por eso es tan difícil robarlos.",
        );
        return;
    }

    ui.group(|ui| {
        ui.label(RichText::new("📱 Autenticador").weak());
        ui.label(RichText::new(game.display_code()).monospace().size(28.0));
        ui.label(format!("⏱ {} s", game.seconds_left(now)));
    });
    ui.add_space(8.0);

    let mut buf = game.input().to_string();
    let resp = ui.add(
        egui::TextEdit::singleline(&mut buf)
            .hint_text("000000")
            .desired_width(120.0),
    );
    if resp.changed() {
        game.set_input(&buf);
    }
    if let Some(err) = game.error() {
        feedback_box(ui, false, err);
    }
}
