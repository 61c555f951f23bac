use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use eframe::egui::{self, Color32, RichText};
use job_board_common::{
    update, AppState, FilterField, IngestError, Intent, Render, Schema, SortMode, ALL_OPTION,
};

use crate::io::{read_intent, JOB_FILE_EXTENSIONS};

pub struct DesktopApp {
    state: AppState,
    /// Collection positions currently listed, recomputed on every render instruction.
    view: Vec<usize>,
    status: String,
    source: Option<PathBuf>,
    load_rx: Option<Receiver<Intent>>,
    loading: bool,
}

impl DesktopApp {
    pub fn new(schema: Schema, sort: SortMode) -> Self {
        Self {
            state: AppState::new(schema, sort),
            view: Vec::new(),
            status: String::new(),
            source: None,
            load_rx: None,
            loading: false,
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        match update(&mut self.state, intent) {
            Render::Full { view, .. } => {
                self.status = format!("Loaded {} jobs", self.state.jobs.len());
                self.view = view;
            }
            Render::List { view } => self.view = view,
            Render::Detail { .. } | Render::Error { .. } | Render::Nothing => {}
        }
    }

    fn open_json(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("JSON", JOB_FILE_EXTENSIONS)
            .pick_file();
        self.start_load(picked);
    }

    fn reload_json(&mut self) {
        self.start_load(self.source.clone());
    }

    fn start_load(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            self.dispatch(Intent::NoFileSelected);
            return;
        };

        let (tx, rx) = mpsc::channel();
        self.load_rx = Some(rx);
        self.loading = true;
        self.status = format!("Loading {}...", path.display());
        self.source = Some(path.clone());

        std::thread::spawn(move || {
            let _ = tx.send(read_intent(&path));
        });
    }

    fn poll_messages(&mut self) {
        let Some(rx) = &self.load_rx else {
            return;
        };
        let intent = match rx.try_recv() {
            Ok(intent) => intent,
            Err(TryRecvError::Empty) => return,
            // 読み込みスレッドが結果を送らずに終了した
            Err(TryRecvError::Disconnected) => {
                Intent::FileFailed(IngestError::Read("loader stopped before reading the file".into()))
            }
        };
        self.loading = false;
        self.load_rx = None;
        self.status.clear();
        self.dispatch(intent);
    }

    fn render_filter(&mut self, ui: &mut egui::Ui, field: FilterField) {
        let current = self.state.selection.get(field).map(str::to_string);
        let values = self.state.options.values(field).to_vec();
        let mut picked: Option<Option<String>> = None;

        egui::ComboBox::from_label(field.label())
            .selected_text(current.as_deref().unwrap_or(ALL_OPTION))
            .show_ui(ui, |ui| {
                if ui.selectable_label(current.is_none(), ALL_OPTION).clicked() {
                    picked = Some(None);
                }
                for value in &values {
                    let selected = current.as_deref() == Some(value.as_str());
                    if ui.selectable_label(selected, value).clicked() {
                        picked = Some(Some(value.clone()));
                    }
                }
            });

        if let Some(value) = picked {
            self.dispatch(Intent::FilterChanged(field, value));
        }
    }

    fn render_sort(&mut self, ui: &mut egui::Ui) {
        let current = self.state.sort;
        let mut picked = None;

        egui::ComboBox::from_label("Sort")
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for mode in SortMode::CHOICES.into_iter().chain([SortMode::Unsorted]) {
                    if ui.selectable_label(mode == current, mode.label()).clicked() {
                        picked = Some(mode);
                    }
                }
            });

        if let Some(mode) = picked {
            self.dispatch(Intent::SortChanged(mode));
        }
    }

    fn render_list(&mut self, ui: &mut egui::Ui) {
        let row_height = ui.text_style_height(&egui::TextStyle::Body) + 8.0;
        let mut clicked = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, self.view.len(), |ui, range| {
                for row in range {
                    let Some(&index) = self.view.get(row) else {
                        continue;
                    };
                    let Some(job) = self.state.jobs.get(index) else {
                        continue;
                    };
                    let is_selected = self.state.selected == Some(index);
                    let text = format!("{} - {}", job.title, job.posted);
                    if ui.selectable_label(is_selected, text).clicked() {
                        clicked = Some(index);
                    }
                }
            });

        if let Some(index) = clicked {
            self.dispatch(Intent::JobSelected(index));
        }
    }

    fn render_details(&self, ui: &mut egui::Ui) {
        let Some(job) = self.state.selected_job() else {
            ui.label("Select a job to see details.");
            return;
        };

        egui::Grid::new("job_detail").striped(true).min_col_width(90.0).show(ui, |ui| {
            for (label, value) in job.detail_fields() {
                ui.label(RichText::new(label).strong());
                ui.label(value);
                ui.end_row();
            }
        });
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.loading {
            ctx.request_repaint();
        }
        self.poll_messages();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.add_enabled(!self.loading, egui::Button::new("Open JSON")).clicked() {
                        self.open_json();
                        ui.close_menu();
                    }
                    if ui.add_enabled(!self.loading, egui::Button::new("Reload JSON")).clicked() {
                        self.reload_json();
                        ui.close_menu();
                    }
                });

                ui.separator();
                if let Some(error) = &self.state.error {
                    ui.label(RichText::new(error).color(Color32::from_rgb(230, 90, 90)));
                }
                if !self.status.is_empty() {
                    ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
                }
            });

            ui.horizontal(|ui| {
                for field in FilterField::ALL {
                    self.render_filter(ui, field);
                }
                ui.separator();
                self.render_sort(ui);
            });
        });

        egui::SidePanel::left("list").resizable(true).min_width(280.0).show(ctx, |ui| {
            ui.heading("Jobs");
            ui.label(format!("{} of {} shown", self.view.len(), self.state.jobs.len()));
            ui.separator();
            self.render_list(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Details");
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_details(ui);
            });
        });
    }
}
