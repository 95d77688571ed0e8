//! Presentation shell: the loading placeholder and the section sequence.
//! Pure data-to-widget mapping over the static content; the only state is
//! the loading gate it reads and a pending scroll target.

use egui::{Align, Color32, Context, RichText, ScrollArea};

use crate::content::{self, ProjectRecord, SkillRecord};
use crate::core::timer::Countdown;
use crate::theme::Theme;

/// Delay before the full content replaces the loading placeholder.
pub const LOADING_DELAY_SECS: f32 = 2.0;

/// Boolean gate between the placeholder and the full content view. False
/// at mount, flipped to true exactly once after the fixed delay, never
/// reset for the lifetime of the mount.
#[derive(Debug, Clone, Copy)]
pub struct LoadingGate {
    countdown: Countdown,
    ready: bool,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::with_delay(LOADING_DELAY_SECS)
    }

    pub fn with_delay(secs: f32) -> Self {
        Self {
            countdown: Countdown::new(secs),
            ready: false,
        }
    }

    /// Accumulate frame time. The flip latches; later ticks cannot undo it.
    pub fn tick(&mut self, delta: f32) {
        if self.countdown.tick(delta) {
            self.ready = true;
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new()
    }
}

/// The scrollable sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Me,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Me,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Me => "Me",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

pub struct Shell {
    theme: Theme,
    scroll_to: Option<Section>,
}

impl Shell {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            scroll_to: None,
        }
    }

    /// One UI pass: placeholder while the gate is closed, the full section
    /// sequence once it opens.
    pub fn ui(&mut self, ctx: &Context, ready: bool) {
        self.apply_style(ctx);
        if ready {
            self.content(ctx);
        } else {
            self.loading(ctx);
        }
    }

    fn apply_style(&self, ctx: &Context) {
        let mut style = (*ctx.style()).clone();
        if self.theme.monospace() {
            style.override_font_id = Some(egui::FontId::monospace(14.0));
        }
        style.visuals.panel_fill = Color32::TRANSPARENT;
        style.visuals.hyperlink_color = self.theme.accent();
        style.visuals.selection.bg_fill = self.theme.accent().linear_multiply(0.4);
        ctx.set_style(style);
    }

    fn loading(&self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.4);
                    ui.add(egui::Spinner::new().size(48.0).color(self.theme.accent()));
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(self.theme.loading_caption())
                            .size(20.0)
                            .color(self.theme.accent()),
                    );
                });
            });
    }

    fn content(&mut self, ctx: &Context) {
        self.nav_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.hero(ui);
                        self.about(ui);
                        self.skills(ui);
                        self.projects(ui);
                        self.contact(ui);
                        self.footer(ui);
                    });
            });
    }

    fn nav_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Portfolio")
                        .size(18.0)
                        .strong()
                        .color(self.theme.accent()),
                );
                ui.separator();
                for section in Section::ALL {
                    if ui.button(section.label()).clicked() {
                        self.scroll_to = Some(section);
                    }
                }
            });
        });
    }

    /// Scrolls the viewport to `section`'s heading when it was the pending
    /// nav target, then clears the request.
    fn anchor(&mut self, ui: &mut egui::Ui, section: Section, text: RichText) {
        let response = ui.label(text);
        if self.scroll_to == Some(section) {
            response.scroll_to_me(Some(Align::Min));
            self.scroll_to = None;
        }
    }

    fn hero(&mut self, ui: &mut egui::Ui) {
        ui.add_space(80.0);
        ui.vertical_centered(|ui| {
            self.anchor(
                ui,
                Section::Me,
                RichText::new(content::NAME)
                    .size(56.0)
                    .strong()
                    .color(self.theme.accent()),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(content::TAGLINE)
                    .size(22.0)
                    .color(self.theme.text_dim()),
            );
            ui.add_space(24.0);
            ui.horizontal(|ui| {
                if ui.button("View my work").clicked() {
                    self.scroll_to = Some(Section::Projects);
                }
                if ui.button("Get in touch").clicked() {
                    self.scroll_to = Some(Section::Contact);
                }
            });
        });
        ui.add_space(80.0);
    }

    fn heading(&mut self, ui: &mut egui::Ui, section: Section) {
        ui.add_space(40.0);
        self.anchor(
            ui,
            section,
            RichText::new(section.label())
                .size(32.0)
                .strong()
                .color(self.theme.accent_alt()),
        );
        ui.add_space(16.0);
    }

    fn about(&mut self, ui: &mut egui::Ui) {
        self.heading(ui, Section::About);
        for paragraph in content::ABOUT {
            ui.label(RichText::new(*paragraph).size(16.0));
            ui.add_space(8.0);
        }
    }

    fn skills(&mut self, ui: &mut egui::Ui) {
        self.heading(ui, Section::Skills);
        egui::Grid::new("skills")
            .num_columns(2)
            .spacing([24.0, 12.0])
            .show(ui, |ui| {
                for skill in content::SKILLS {
                    self.skill_row(ui, skill);
                    ui.end_row();
                }
            });
    }

    fn skill_row(&self, ui: &mut egui::Ui, skill: &SkillRecord) {
        ui.label(
            RichText::new(format!("{} {}", skill.icon, skill.name))
                .size(16.0)
                .strong(),
        );
        ui.add(
            egui::ProgressBar::new(f32::from(skill.level) / 100.0)
                .desired_width(260.0)
                .fill(self.theme.accent_alt())
                .text(format!("{}%", skill.level)),
        );
    }

    fn projects(&mut self, ui: &mut egui::Ui) {
        self.heading(ui, Section::Projects);
        for project in content::PROJECTS {
            self.project_card(ui, project);
            ui.add_space(16.0);
        }
    }

    fn project_card(&self, ui: &mut egui::Ui, project: &ProjectRecord) {
        let [r, g, b] = project.accent;
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(project.title)
                        .size(20.0)
                        .strong()
                        .color(Color32::from_rgb(r, g, b)),
                );
                ui.add_space(6.0);
                ui.label(RichText::new(project.summary).size(15.0));
                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in project.tags {
                        ui.label(
                            RichText::new(format!(" {tag} "))
                                .size(13.0)
                                .background_color(self.theme.accent().linear_multiply(0.15))
                                .color(self.theme.accent()),
                        );
                    }
                });
            });
    }

    fn contact(&mut self, ui: &mut egui::Ui) {
        self.heading(ui, Section::Contact);
        ui.label(RichText::new(content::CONTACT_BLURB).size(16.0));
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.hyperlink_to("✉ Email", content::EMAIL_URL);
            ui.add_space(16.0);
            ui.hyperlink_to("GitHub", content::GITHUB_URL);
            ui.add_space(16.0);
            ui.hyperlink_to("LinkedIn", content::LINKEDIN_URL);
        });
    }

    fn footer(&self, ui: &mut egui::Ui) {
        ui.add_space(40.0);
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(content::FOOTER)
                    .size(13.0)
                    .color(self.theme.text_dim()),
            );
        });
        ui.add_space(20.0);
    }
}
