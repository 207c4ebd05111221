//! Main application window: board, side panel, and CPU turn scheduling
//!
//! The CPU reply is not computed on the spot. When the human moves, the app
//! arms a short deadline and runs the automated turn once it passes, so the
//! opponent appears to think for a moment. The game core stays synchronous;
//! only this window owns timing.

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, Vec2};

use super::board_view::BoardView;
use super::theme::*;
use crate::board::{Player, Pos};
use crate::config::AppConfig;
use crate::engine::Difficulty;
use crate::error::GameError;
use crate::game::{Game, GameStatus, TurnOutcome};

/// Main application window.
pub struct GomokuApp {
    game: Game,
    board_view: BoardView,
    status: String,
    move_log: Vec<String>,
    /// When the scheduled CPU reply becomes due
    cpu_due: Option<Instant>,
    cpu_delay: Duration,
}

impl GomokuApp {
    /// Create the app from the loaded configuration.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            game: Game::new(config.difficulty),
            board_view: BoardView::default(),
            status: "Your turn.".to_string(),
            move_log: Vec::new(),
            cpu_due: None,
            cpu_delay: Duration::from_millis(config.cpu_delay_ms),
        }
    }

    /// Apply a click on the board as the human's move.
    fn handle_click(&mut self, pos: Pos) {
        match self.game.apply_human_move(pos) {
            Ok(TurnOutcome::Win) => {
                self.push_log_entry();
                self.status = "You win!".to_string();
            }
            Ok(TurnOutcome::Continue) => {
                self.push_log_entry();
                self.status = "CPU is thinking...".to_string();
                self.cpu_due = Some(Instant::now() + self.cpu_delay);
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    /// Run the scheduled CPU reply once its deadline has passed.
    fn poll_cpu(&mut self) {
        let due_passed = self.cpu_due.is_some_and(|due| Instant::now() >= due);
        if !due_passed {
            return;
        }
        self.cpu_due = None;

        match self.game.run_automated_turn() {
            Ok((_, TurnOutcome::Win)) => {
                self.push_log_entry();
                self.status = "CPU wins!".to_string();
            }
            Ok((_, TurnOutcome::Continue)) => {
                self.push_log_entry();
                self.status = "Your turn.".to_string();
            }
            Err(GameError::NoLegalMove) => self.status = "No moves remain.".to_string(),
            Err(err) => self.status = err.to_string(),
        }
    }

    fn push_log_entry(&mut self) {
        if let Some(record) = self.game.moves().last() {
            self.move_log
                .push(format!("{}: {}", record.player.label(), record.pos));
        }
    }

    fn try_undo(&mut self) {
        if self.game.undo().is_ok() {
            // The undo also swallows any reply still waiting on its timer.
            self.cpu_due = None;
            let keep = self.move_log.len().saturating_sub(2);
            self.move_log.truncate(keep);
            self.status = "Undo used. Your turn.".to_string();
        }
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.move_log.clear();
        self.cpu_due = None;
        self.status = "Your turn.".to_string();
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.try_undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.new_game();
            }
        });
    }

    /// Render the side panel with game info and controls
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(230.0)
            .max_width(270.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_settings_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);
                ui.add_space(10.0);
                self.render_move_log_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("●○")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(180, 180, 185)),
            );
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("Five in a row vs. the CPU")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render the turn indicator and the status line
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = match self.game.status() {
                GameStatus::Won(winner) => winner,
                GameStatus::InProgress => self.game.active_player(),
            };
            let is_black = side == Player::Human;
            let (stone_char, accent) = if is_black {
                ("●", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", egui::Color32::from_rgb(220, 220, 225))
            };

            let status_color = match self.game.status() {
                GameStatus::Won(Player::Human) => WIN_HIGHLIGHT,
                GameStatus::Won(Player::Cpu) => STATUS_LOST,
                GameStatus::InProgress if self.cpu_due.is_some() => STATUS_BUSY,
                GameStatus::InProgress => STATUS_OK,
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(side.label())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(RichText::new(&self.status).size(12.0).color(status_color));
                });
            });
        });
    }

    /// Render the difficulty selector
    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DIFFICULTY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let mut selected = self.game.difficulty();
            egui::ComboBox::from_id_salt("difficulty")
                .selected_text(selected.label())
                .width(ui.available_width() - 8.0)
                .show_ui(ui, |ui| {
                    for level in Difficulty::ALL {
                        ui.selectable_value(&mut selected, level, level.label());
                    }
                });
            if selected != self.game.difficulty() {
                self.game.set_difficulty(selected);
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new("Takes effect on the CPU's next move.")
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render undo / new game controls
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let undo_label = format!("Undo ({})", self.game.undos_left());
                if ui
                    .add_enabled(self.game.undo_available(), egui::Button::new(undo_label))
                    .clicked()
                {
                    self.try_undo();
                }

                ui.add_space(4.0);

                if ui.button("New Game").clicked() {
                    self.new_game();
                }
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.moves().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new("Keys: U undo, N new game")
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render the scrollable move log
    fn render_move_log_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical()
                .max_height(190.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if self.move_log.is_empty() {
                        ui.label(RichText::new("No moves yet.").size(11.0).color(TEXT_MUTED));
                    }
                    for (i, entry) in self.move_log.iter().enumerate() {
                        ui.label(
                            RichText::new(format!("{:>3}. {entry}", i + 1))
                                .size(11.0)
                                .monospace()
                                .color(TEXT_SECONDARY),
                        );
                    }
                });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let accept_input =
                self.game.in_progress() && self.game.active_player() == Player::Human;
            let clicked = self.board_view.show(ui, &self.game, accept_input);

            if let Some(pos) = clicked {
                self.handle_click(pos);
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.poll_cpu();

        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep painting while a reply is pending so the deadline fires.
        if self.cpu_due.is_some() {
            ctx.request_repaint();
        }
    }
}
