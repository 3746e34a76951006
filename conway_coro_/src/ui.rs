// ui.rs - eframe window: scaled pixel rendering plus run controls

use std::time::{Duration, Instant};

use conway::{Cell, CellDomain, Grid, Palette, Simulation, patterns, random_grid, render_pixels};
use eframe::egui;
use egui::{Color32, Rect, Vec2, pos2};
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::config::SimConfig;
use crate::coro;

pub fn run_window(
    config: SimConfig,
    sim: Simulation,
    runtime: tokio::runtime::Runtime,
    rng: StdRng,
) -> anyhow::Result<()> {
    let (rows, cols) = sim.grid().dimensions();
    let width = (cols * config.scale) as f32;
    let height = (rows * config.scale) as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width.max(640.0) + 32.0, height + 200.0]),
        ..Default::default()
    };

    let app = LifeApp::new(config, sim, runtime, rng);
    eframe::run_native(
        "Cellular Automaton (Row Coroutines)",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("window closed with an error: {e}"))
}

pub struct LifeApp {
    sim: Simulation,
    config: SimConfig,
    runtime: tokio::runtime::Runtime,
    rng: StdRng,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub faction_b_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    texture: Option<egui::TextureHandle>,
    texture_palette: Option<Palette>,
    dirty: bool,
}

impl LifeApp {
    pub fn new(config: SimConfig, sim: Simulation, runtime: tokio::runtime::Runtime, rng: StdRng) -> Self {
        let palette = Palette::default();
        Self {
            update_interval: config.interval,
            sim,
            config,
            runtime,
            rng,
            is_running: false,
            last_update: Instant::now(),
            live_color: color(palette.faction_a),
            faction_b_color: color(palette.faction_b),
            dead_color: color(palette.dead),
            selected_pattern: 0,
            texture: None,
            texture_palette: None,
            dirty: true,
        }
    }

    fn palette(&self) -> Palette {
        Palette {
            dead: self.dead_color.to_array(),
            faction_a: self.live_color.to_array(),
            faction_b: self.faction_b_color.to_array(),
        }
    }

    /// Steps once via the row coroutines and applies the stop conditions.
    fn update_generation(&mut self) {
        let stepped = self
            .runtime
            .block_on(coro::step_rows(self.sim.engine(), self.sim.grid()))
            .and_then(|next| Ok(self.sim.commit(next).map(|_| ())?));
        if let Err(e) = stepped {
            error!(error = %e, "step failed, pausing");
            self.is_running = false;
            return;
        }
        self.dirty = true;

        if self.config.stop_on_cycle && self.sim.is_cycling() {
            info!(generation = self.sim.generation(), "cycle detected, pausing");
            self.is_running = false;
        }
        if self.config.generation_limit.is_some_and(|limit| self.sim.generation() >= limit) {
            info!(generation = self.sim.generation(), "generation limit reached, pausing");
            self.is_running = false;
        }
    }

    fn replace_board(&mut self, board: conway::Result<Grid>) {
        match board {
            Ok(grid) => {
                self.sim.reset(grid);
                self.dirty = true;
            }
            Err(e) => error!(error = %e, "could not build board"),
        }
    }

    fn clear_grid(&mut self) {
        let (rows, cols) = self.sim.grid().dimensions();
        self.replace_board(Grid::dead(rows, cols));
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            let (rows, cols) = self.sim.grid().dimensions();
            self.replace_board(pattern.centered(rows, cols));
        }
    }

    fn apply_random_pattern(&mut self) {
        let (rows, cols) = self.sim.grid().dimensions();
        let board = random_grid(rows, cols, &self.config.distribution, &mut self.rng);
        self.replace_board(board);
    }

    fn toggle_cell(&mut self, row: usize, col: usize) {
        let domain = self.sim.engine().rule().domain();
        let next = next_toggle(self.sim.grid().get(row, col), domain);
        self.sim.set_cell(row, col, next);
        self.dirty = true;
    }

    /// Re-uploads the pixel buffer when the board or the colours changed.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let palette = self.palette();
        if !self.dirty && self.texture_palette == Some(palette) {
            return;
        }
        let buffer = match render_pixels(self.sim.grid(), self.config.scale, &palette) {
            Ok(buffer) => buffer,
            Err(e) => {
                error!(error = %e, "could not render grid");
                return;
            }
        };
        let image = egui::ColorImage::from_rgba_unmultiplied(buffer.size(), &buffer.rgba);
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => self.texture = Some(ctx.load_texture("grid", image, egui::TextureOptions::NEAREST)),
        }
        self.texture_palette = Some(palette);
        self.dirty = false;
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Q)) {
            info!("quit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }
        self.refresh_texture(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!(
                "{} / {} (row coroutines)",
                self.sim.engine().rule(),
                self.sim.engine().policy().name()
            ));

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.sim.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Alive / A:");
                ui.color_edit_button_srgba(&mut self.live_color);
                if self.sim.engine().rule().domain() == CellDomain::Ternary {
                    ui.label("B:");
                    ui.color_edit_button_srgba(&mut self.faction_b_color);
                }
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();
            ui.label("Click cells to cycle their value while paused. Esc or Q quits.");
            ui.separator();

            let (rows, cols) = self.sim.grid().dimensions();
            let scale = self.config.scale;
            let size = Vec2::new((cols * scale) as f32, (rows * scale) as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());

            if let Some(texture) = &self.texture {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                painter.image(texture.id(), response.rect, uv, Color32::WHITE);
            }

            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - response.rect.min;
                    if let Some((row, col)) = cell_at(offset.x, offset.y, scale, (rows, cols)) {
                        self.toggle_cell(row, col);
                    }
                }
            }

            ui.separator();

            let grid = self.sim.grid();
            let total = rows * cols;
            let live = grid.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live}"));
                if self.sim.engine().rule().domain() == CellDomain::Ternary {
                    ui.label(format!("A: {}", grid.count(Cell::FactionA)));
                    ui.label(format!("B: {}", grid.count(Cell::FactionB)));
                }
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
            });
        });

        // Keep the animation going while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

fn color([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Grid cell under a point given relative to the top-left of the board.
fn cell_at(x: f32, y: f32, scale: usize, (rows, cols): (usize, usize)) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 || scale == 0 {
        return None;
    }
    let row = (y / scale as f32) as usize;
    let col = (x / scale as f32) as usize;
    (row < rows && col < cols).then_some((row, col))
}

/// Value a click cycles a cell to, staying inside the rule's domain.
fn next_toggle(cell: Cell, domain: CellDomain) -> Cell {
    match (cell, domain) {
        (Cell::Dead, _) => Cell::FactionA,
        (Cell::FactionA, CellDomain::Ternary) => Cell::FactionB,
        _ => Cell::Dead,
    }
}
