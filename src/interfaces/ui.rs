use crate::application::console::FraudConsole;
use crate::domain::fraud::{BinaryAnswer, PredictionReport};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use chrono::Utc;
use eframe::egui;

impl eframe::App for FraudConsole {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // --- 1. Pull pending log lines into the activity panel ---
        self.drain_logs();

        // --- 2. Top Status Bar ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("💳 Fraud Desk");
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}",
                        self.classifier.name(),
                        self.classifier.version()
                    ))
                    .color(DesignSystem::TEXT_SECONDARY)
                    .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("● MODEL LOADED")
                            .color(DesignSystem::SUCCESS)
                            .small(),
                    );
                    ui.separator();
                    ui.label(format!("Time (UTC): {}", Utc::now().format("%H:%M:%S")));
                });
            });
        });

        // --- 3. Left Sidebar: Activity Log ---
        egui::SidePanel::left("activity_panel")
            .default_width(300.0)
            .min_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Activity");
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.log_lines {
                            let color = if line.contains("ERROR") {
                                DesignSystem::DANGER
                            } else if line.contains("WARN") {
                                DesignSystem::WARNING
                            } else {
                                DesignSystem::TEXT_MUTED
                            };
                            ui.label(egui::RichText::new(line).color(color).small());
                        }
                    });
            });

        // --- 4. Central Panel: Form + Result ---
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Credit Card Fraud Detection");
                    ui.label(
                        egui::RichText::new(
                            "Enter transaction details and the model will predict whether it \
                             looks fraudulent.",
                        )
                        .color(DesignSystem::TEXT_SECONDARY),
                    );
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    self.transaction_form(ui);
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    let predict = ui.add(
                        egui::Button::new(egui::RichText::new("Predict").strong())
                            .fill(DesignSystem::ACCENT_PRIMARY)
                            .min_size(egui::vec2(120.0, 32.0)),
                    );
                    if predict.clicked() {
                        self.on_predict();
                    }

                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    if let Some(error) = self.last_error.clone() {
                        ui.colored_label(
                            DesignSystem::DANGER,
                            format!("Prediction failed: {}. Press Predict to retry.", error),
                        );
                        ui.add_space(DesignSystem::SPACING_SMALL);
                    }

                    if let Some(report) = self.last_report.clone() {
                        result_card(ui, &report);
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        interpretation_card(ui);
                    }
                });
        });

        // Keep the clock and log panel fresh
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

impl FraudConsole {
    fn transaction_form(&mut self, ui: &mut egui::Ui) {
        Card::new().title("TRANSACTION DETAILS").show(ui, |ui| {
            egui::Grid::new("transaction_grid")
                .min_col_width(240.0)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Distance from home (km)");
                    ui.add(
                        egui::DragValue::new(&mut self.distance_from_home)
                            .range(0.0..=f64::INFINITY)
                            .speed(0.1),
                    )
                    .on_hover_text(
                        "How far from the cardholder's home this transaction took place.",
                    );
                    ui.end_row();

                    ui.label("Distance from last transaction (km)");
                    ui.add(
                        egui::DragValue::new(&mut self.distance_from_last_transaction)
                            .range(0.0..=f64::INFINITY)
                            .speed(0.1),
                    )
                    .on_hover_text("How far from the previous transaction location.");
                    ui.end_row();

                    ui.label("Purchase amount vs typical (ratio)");
                    ui.add(
                        egui::DragValue::new(&mut self.ratio_to_median_purchase_price)
                            .range(0.0..=f64::INFINITY)
                            .speed(0.05),
                    )
                    .on_hover_text(
                        "1.0 means typical. 2.0 means 2x higher than the user's median purchase.",
                    );
                    ui.end_row();
                });
        });

        ui.add_space(DesignSystem::SPACING_SMALL);

        Card::new().title("PAYMENT & MERCHANT").show(ui, |ui| {
            egui::Grid::new("payment_grid")
                .min_col_width(240.0)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    yes_no_selector(
                        ui,
                        "Repeat retailer?",
                        &mut self.repeat_retailer,
                        "Is this purchase from a retailer the user has bought from before?",
                    );
                    yes_no_selector(
                        ui,
                        "Used chip?",
                        &mut self.used_chip,
                        "Was the card chip used for the transaction?",
                    );
                    yes_no_selector(
                        ui,
                        "PIN used?",
                        &mut self.used_pin_number,
                        "Was a PIN used in the transaction?",
                    );
                    yes_no_selector(
                        ui,
                        "Online order?",
                        &mut self.online_order,
                        "Was this transaction made online?",
                    );
                });
        });
    }
}

fn yes_no_selector(
    ui: &mut egui::Ui,
    label: &str,
    answer: &mut BinaryAnswer,
    hint: &str,
) {
    ui.label(label).on_hover_text(hint);
    egui::ComboBox::from_id_salt(label)
        .selected_text(answer.label())
        .show_ui(ui, |ui| {
            for option in BinaryAnswer::LABELS {
                ui.selectable_value(answer, BinaryAnswer::from_label(option), option);
            }
        });
    ui.end_row();
}

fn result_card(ui: &mut egui::Ui, report: &PredictionReport) {
    Card::new().title("RESULT").show(ui, |ui| {
        ui.horizontal(|ui| {
            metric(
                ui,
                "Fraud probability",
                &report.probability_text,
                Some(&format!("({})", report.percent_text)),
                DesignSystem::TEXT_PRIMARY,
            );
            ui.add_space(DesignSystem::SPACING_LARGE);
            metric(
                ui,
                "Risk level",
                report.risk_tier.label(),
                None,
                DesignSystem::tier_color(report.risk_tier),
            );
        });

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.add(
            egui::ProgressBar::new(report.fraud_probability as f32)
                .text(report.percent_text.clone()),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        let verdict_color = DesignSystem::verdict_color(report.verdict);
        let banner = match report.verdict {
            crate::domain::fraud::Verdict::Fraudulent => "Prediction: Fraudulent 🚨",
            crate::domain::fraud::Verdict::Legit => "Prediction: Legit ✅",
        };
        DesignSystem::banner_frame(verdict_color).show(ui, |ui| {
            ui.label(
                egui::RichText::new(banner)
                    .strong()
                    .color(verdict_color)
                    .size(16.0),
            );
        });
    });
}

fn interpretation_card(ui: &mut egui::Ui) {
    Card::new().title("HOW TO INTERPRET THIS").show(ui, |ui| {
        ui.label(
            "This tool outputs a fraud probability (0 to 1) and a prediction \
             (Fraudulent / Legit).",
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label(egui::RichText::new("Fraud probability").strong());
        ui.label(
            "A value closer to 1.0 means the transaction looks more similar to fraud \
             patterns seen in the training data. A value closer to 0.0 means it looks \
             more similar to legitimate transactions.",
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label(egui::RichText::new("Risk level").strong());
        ui.label("Low (< 0.30): Unlikely to be fraud based on the model.");
        ui.label("Medium (0.30-0.70): Some warning signs; may need a manual review.");
        ui.label("High (>= 0.70): Strong warning signs; often worth flagging.");
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label(egui::RichText::new("Important notes").strong());
        ui.label(
            egui::RichText::new(
                "This is a demo, not a real banking system. The model can make mistakes: \
                 a false positive is a legit transaction flagged as fraud, a false \
                 negative is a fraud transaction predicted as legit. The prediction is \
                 based only on the features you enter (distance, typical spend ratio, \
                 chip/PIN, online, repeat retailer).",
            )
            .color(DesignSystem::TEXT_SECONDARY),
        );
    });
}

// Small stat block: caption label on top, value below
fn metric(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    caption: Option<&str>,
    value_color: egui::Color32,
) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .small()
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.label(
            egui::RichText::new(value)
                .heading()
                .strong()
                .color(value_color),
        );
        if let Some(caption) = caption {
            ui.label(
                egui::RichText::new(caption)
                    .small()
                    .color(DesignSystem::TEXT_MUTED),
            );
        }
    });
}
