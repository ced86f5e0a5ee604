use crate::app::{DokkaiApp, SocialProvider};
use egui::{Align, Button, CentralPanel, Color32, Context, RichText, TextEdit};

pub fn ui_login(app: &mut DokkaiApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        // Centrado vertical aproximado
        let estimated_h = 480.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs);

        let max_width = 360.0;
        let content_width = ui.available_width().min(max_width);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("DokkaiGo")
                    .size(40.0)
                    .strong()
                    .color(Color32::from_rgb(0x00, 0x7B, 0xFF)),
            );
            ui.label(RichText::new("From Beginner to Pro, Master Dokkai with Ease.").italics());
            ui.add_space(30.0);

            ui.add(
                TextEdit::singleline(&mut app.login_form.email)
                    .hint_text("Email")
                    .desired_width(content_width),
            );
            ui.add_space(8.0);
            ui.add(
                TextEdit::singleline(&mut app.login_form.password)
                    .hint_text("Password")
                    .password(true)
                    .desired_width(content_width),
            );
            ui.add_space(16.0);

            let btn = |label: &str, fill: Color32| {
                Button::new(RichText::new(label).strong().color(Color32::WHITE)).fill(fill)
            };

            let login = ui.add_sized([content_width, 40.0], btn("Login", Color32::from_rgb(0x00, 0x7B, 0xFF)));
            ui.add_space(6.0);
            let signup = ui.add_sized([content_width, 40.0], btn("Sign Up", Color32::from_rgb(0x28, 0xA7, 0x45)));

            ui.add_space(14.0);
            ui.label("OR");
            ui.add_space(14.0);

            let mut social = None;
            for provider in SocialProvider::ALL {
                let fill = match provider {
                    SocialProvider::Google => Color32::from_rgb(0x42, 0x85, 0xF4),
                    SocialProvider::Facebook => Color32::from_rgb(0x3b, 0x59, 0x98),
                    SocialProvider::Apple => Color32::BLACK,
                };
                if ui
                    .add_sized([content_width, 36.0], btn(&provider.button_label(), fill))
                    .clicked()
                {
                    social = Some(provider);
                }
                ui.add_space(6.0);
            }

            if login.clicked() {
                app.login();
            }
            if signup.clicked() {
                app.sign_up();
            }
            if let Some(provider) = social {
                app.social_login(provider);
            }
        });
    });
}
