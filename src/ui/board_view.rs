//! Board rendering and click handling
//!
//! The board is drawn with a single painter: wooden background, grid, star
//! points, coordinate labels, stones, and the markers layered on top. Input
//! comes back as a board position so the caller decides what a click means.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use crate::board::{Player, Pos, BOARD_SIZE};
use crate::game::Game;

/// Board widget: rendering plus screen/board coordinate mapping.
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked position, if any.
    ///
    /// `accept_input` gates both the hover preview and clicks; it is off
    /// while the CPU reply is pending and once the game is over.
    pub fn show(&mut self, ui: &mut egui::Ui, game: &Game, accept_input: bool) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, game);

        if let Some(pos) = game.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(run) = game.winning_run() {
            self.draw_winning_run(&painter, &run);
        }

        let mut clicked_pos = None;
        if accept_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = game.cell(board_pos).is_none();
                    self.draw_hover_preview(&painter, board_pos, is_valid);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels: letters across the top, numbers down the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..BOARD_SIZE {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + 14.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..BOARD_SIZE {
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + 14.0, y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                (row + 1).to_string(),
                font.clone(),
                GRID_LINE,
            );
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, game: &Game) {
        for y in 0..BOARD_SIZE as u8 {
            for x in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(x, y);
                if let Some(player) = game.cell(pos) {
                    self.draw_stone(painter, pos, player);
                }
            }
        }
    }

    /// Draw a single stone with a soft shadow
    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        match player {
            Player::Human => {
                let shadow_offset = Vec2::new(2.0, 2.0);
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Player::Cpu => {
                let shadow_offset = Vec2::new(2.0, 2.0);
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Highlight the run that decided the game
    fn draw_winning_run(&self, painter: &Painter, run: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in run.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for &pos in run {
            let center = self.board_to_screen(pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Draw hover preview: a ghost of the human's stone, or a red blot on
    /// an occupied cell
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            hover_preview()
        } else {
            hover_invalid()
        };
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let fx = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let fy = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let x = fx.floor() as i32;
        let y = fy.floor() as i32;

        if Pos::is_valid(x, y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
