//! Layout and drawing: playfield, swap cursor, sidebar, pause overlay.

use crate::game::Game;
use crate::theme::Theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use std::collections::HashSet;
use std::time::Instant;
use tachyonfx::{
    CellFilter, Duration as TfxDuration, Effect, EffectRenderer, Interpolation, fx, ref_count,
};

/// Each grid cell is two terminal columns wide.
const CELL_WIDTH: u16 = 2;

const SIDEBAR_WIDTH: u16 = 26;

/// Duration of the combo fade (TachyonFX) in ms, shorter than the combo
/// display timer so the cells read as "about to clear".
const COMBO_FADE_MS: u32 = 1200;

/// Playfield size in terminal cells (board + border).
fn playfield_pixel_size(width: u16, height: u16) -> (u16, u16) {
    (width * CELL_WIDTH + 2, height + 2)
}

/// Playfield inner rect (board only, no border); matches draw layout.
fn playfield_board_rect(area: Rect, game: &Game) -> Rect {
    let (pw, ph) = playfield_pixel_size(game.grid.width as u16, game.grid.height as u16);
    let total_w = pw + SIDEBAR_WIDTH;
    let x = area.x + area.width.saturating_sub(total_w) / 2;
    let y = area.y + area.height.saturating_sub(ph) / 2;
    let outer = Rect {
        x,
        y,
        width: pw.min(area.width),
        height: ph.min(area.height),
    };
    Rect {
        x: outer.x + 1,
        y: outer.y + 1,
        width: (game.grid.width as u16 * CELL_WIDTH).min(outer.width.saturating_sub(2)),
        height: (game.grid.height as u16).min(outer.height.saturating_sub(2)),
    }
}

/// Buffer (x, y) positions covered by pending combo cells.
fn combo_buffer_positions(board_rect: Rect, combo_cells: &HashSet<(usize, usize)>) -> HashSet<(u16, u16)> {
    let mut set = HashSet::new();
    for &(gx, gy) in combo_cells {
        let x0 = board_rect.x + (gx as u16) * CELL_WIDTH;
        let y0 = board_rect.y + gy as u16;
        for bx in x0..(x0 + CELL_WIDTH).min(board_rect.x + board_rect.width) {
            if y0 < board_rect.y + board_rect.height {
                set.insert((bx, y0));
            }
        }
    }
    set
}

/// Create or update the combo fade effect and process it (TachyonFX:
/// fade pending combo cells towards the background while their timer
/// runs).
fn apply_combo_effect(
    frame: &mut Frame,
    game: &Game,
    theme: &Theme,
    area: Rect,
    combo_cells: &HashSet<(usize, usize)>,
    combo_effect: &mut Option<Effect>,
    combo_process_time: &mut Option<Instant>,
    now: Instant,
) {
    let board_rect = playfield_board_rect(area, game);
    let delta = combo_process_time
        .map(|t| now.saturating_duration_since(t))
        .unwrap_or(std::time::Duration::ZERO);
    let delta_ms = delta.as_millis().min(u32::MAX as u128) as u32;
    let tfx_delta = TfxDuration::from_millis(delta_ms);
    *combo_process_time = Some(now);

    if combo_effect.is_none() {
        let combo_set = combo_buffer_positions(board_rect, combo_cells);
        let filter = CellFilter::PositionFn(ref_count(move |pos: Position| {
            combo_set.contains(&(pos.x, pos.y))
        }));
        let bg = theme.bg;
        let effect = fx::fade_to(bg, bg, (COMBO_FADE_MS, Interpolation::Linear))
            .with_filter(filter)
            .with_area(board_rect);
        *combo_effect = Some(effect);
    }

    if let Some(effect) = combo_effect {
        frame.render_effect(effect, board_rect, tfx_delta);
    }
}

/// Draw the whole screen, with optional pause overlay and combo fade.
#[allow(clippy::too_many_arguments)]
pub fn draw(
    frame: &mut Frame,
    game: &Game,
    theme: &Theme,
    area: Rect,
    combo_effect: &mut Option<Effect>,
    combo_process_time: &mut Option<Instant>,
    now: Instant,
    no_animation: bool,
) {
    let combo_cells: HashSet<(usize, usize)> = game
        .pending_combo_groups()
        .iter()
        .flat_map(|group| group.iter())
        .flat_map(|combo| combo.positions())
        .collect();

    draw_game(frame, game, theme, area, &combo_cells);
    if game.paused {
        draw_pause_overlay(frame, theme, area);
    }
    if !combo_cells.is_empty() && !no_animation && !game.paused {
        apply_combo_effect(
            frame,
            game,
            theme,
            area,
            &combo_cells,
            combo_effect,
            combo_process_time,
            now,
        );
    }
}

/// Playfield + sidebar; use the full area and center the board.
fn draw_game(
    frame: &mut Frame,
    game: &Game,
    theme: &Theme,
    area: Rect,
    combo_cells: &HashSet<(usize, usize)>,
) {
    let (pw, ph) = playfield_pixel_size(game.grid.width as u16, game.grid.height as u16);
    let total_w = pw + SIDEBAR_WIDTH;

    let horiz_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(total_w),
            Constraint::Fill(1),
        ])
        .split(area);

    let vert_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(ph),
            Constraint::Fill(1),
        ])
        .split(horiz_chunks[1]);

    let active_area = vert_chunks[1];

    let (playfield_area, sidebar_area) = {
        let inner = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(pw), Constraint::Length(SIDEBAR_WIDTH)])
            .split(active_area);
        (inner[0], inner[1])
    };

    draw_playfield(frame, game, theme, playfield_area, combo_cells);
    draw_sidebar(frame, game, theme, sidebar_area);
}

fn draw_playfield(
    frame: &mut Frame,
    game: &Game,
    theme: &Theme,
    area: Rect,
    combo_cells: &HashSet<(usize, usize)>,
) {
    let title = format!(" Swaptui  Score: {} ", game.score);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.div_line).bg(theme.bg))
        .title(Span::styled(title, theme.title));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let board_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: (game.grid.width as u16 * CELL_WIDTH).min(inner.width),
        height: (game.grid.height as u16).min(inner.height),
    };

    let (cx, cy) = game.swapper_pos;
    let buf = frame.buffer_mut();

    for y in 0..game.grid.height {
        for x in 0..game.grid.width {
            let code = game.grid.cell(x, y).unwrap_or(0);
            let under_cursor = y == cy && (x == cx || x == cx + 1);

            let (symbol, style) = if combo_cells.contains(&(x, y)) {
                ("██", Style::default().fg(Color::White).bg(theme.bg))
            } else if under_cursor {
                // The cursor shows through the shaded block glyph.
                let fg = if code == 0 { theme.bg } else { theme.block_color(code) };
                ("▓▓", Style::default().fg(fg).bg(theme.cursor))
            } else if code == 0 {
                ("  ", Style::default().bg(theme.bg))
            } else {
                ("██", Style::default().fg(theme.block_color(code)).bg(theme.bg))
            };

            let rx = board_rect.x + (x as u16) * CELL_WIDTH;
            let ry = board_rect.y + y as u16;
            if rx + 1 < board_rect.x + board_rect.width && ry < board_rect.y + board_rect.height {
                buf.set_string(rx, ry, symbol, style);
            }
        }
    }
}

fn draw_pause_overlay(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup_w = 28u16;
    let popup_h = 5u16;
    let popup = Rect {
        x: area.x + area.width.saturating_sub(popup_w) / 2,
        y: area.y + area.height.saturating_sub(popup_h) / 2,
        width: popup_w.min(area.width),
        height: popup_h.min(area.height),
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Paused ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " P — Resume    Q — Quit ",
            Style::default().fg(theme.main_fg),
        )),
    ];
    let p = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.div_line).bg(theme.bg)),
    );
    p.render(popup, frame.buffer_mut());
}

fn draw_sidebar(frame: &mut Frame, game: &Game, theme: &Theme, area: Rect) {
    let title_style = Style::default().fg(theme.title);
    let fg_style = Style::default().fg(theme.main_fg);
    let border_style = Style::default().fg(theme.div_line).bg(theme.bg);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Stats
            Constraint::Length(1), // gap
            Constraint::Length(4), // Colours
            Constraint::Length(1), // gap
            Constraint::Length(8), // States
            Constraint::Length(1), // gap
            Constraint::Length(6), // Keys
        ])
        .split(area);

    // --- Stats ---
    let stats_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let stats_inner = stats_block.inner(chunks[0]);
    stats_block.render(chunks[0], frame.buffer_mut());
    let stats_lines = vec![
        Line::from(vec![
            Span::styled("Score: ", title_style),
            Span::styled(game.score.to_string(), fg_style),
        ]),
        Line::from(vec![
            Span::styled("Multiplier: ", title_style),
            Span::styled(format!("x{}", game.score_multiplier), fg_style),
        ]),
        Line::from(vec![
            Span::styled("Blocks: ", title_style),
            Span::styled(game.grid.block_count().to_string(), fg_style),
        ]),
    ];
    Paragraph::new(stats_lines).render(stats_inner, frame.buffer_mut());

    // --- Colours ---
    let colours_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let colours_inner = colours_block.inner(chunks[2]);
    colours_block.render(chunks[2], frame.buffer_mut());
    let colours_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(colours_inner);
    Paragraph::new(Line::from(Span::styled("Colours", title_style)))
        .render(colours_layout[0], frame.buffer_mut());
    draw_colour_strip(frame, game, theme, colours_layout[1]);

    // --- States ---
    let states_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let states_inner = states_block.inner(chunks[4]);
    states_block.render(chunks[4], frame.buffer_mut());
    let pending: usize = game
        .pending_combo_groups()
        .iter()
        .map(|group| group.len())
        .sum();
    let states_lines = vec![
        Line::from(vec![
            Span::styled("States ", title_style),
            Span::styled(format!("({pending} pending)"), fg_style),
        ]),
        Line::from(Span::styled(game.state_summary(), fg_style)),
    ];
    Paragraph::new(states_lines)
        .wrap(Wrap { trim: true })
        .render(states_inner, frame.buffer_mut());

    // --- Keys ---
    let keys_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let keys_inner = keys_block.inner(chunks[6]);
    keys_block.render(chunks[6], frame.buffer_mut());
    let keys_lines = vec![
        Line::from(Span::styled("Arrows/hjkl  Move", fg_style)),
        Line::from(Span::styled("Space/Enter  Swap", fg_style)),
        Line::from(Span::styled("P Pause      Q Quit", fg_style)),
    ];
    Paragraph::new(keys_lines).render(keys_inner, frame.buffer_mut());
}

/// One coloured block per playable symbol code.
fn draw_colour_strip(frame: &mut Frame, game: &Game, theme: &Theme, area: Rect) {
    let count = u16::from(game.grid.nb_symbols.saturating_sub(1)).max(1);
    let block_w = (area.width / count).max(1);
    for code in 1..game.grid.nb_symbols {
        let r = Rect {
            x: area.x + u16::from(code - 1) * block_w,
            y: area.y,
            width: block_w,
            height: area.height.min(1),
        };
        let c = theme.block_color(code);
        let p = Paragraph::new("█").style(Style::default().fg(c).bg(c));
        p.render(r, frame.buffer_mut());
    }
}
