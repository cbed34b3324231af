// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the composer screen.
//!
//! The `App` struct wires together the composer, localization, notifications
//! and the platform collaborators, and translates messages into side effects
//! like permission requests, photo picking and photo decoding.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::composer as use_case;
use crate::application::port::{MediaPicker, PermissionGate, PickOptions};
use crate::config::{self, Config};
use crate::domain::card::{CardDefaults, TemplateIndex};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{FsPermissionGate, RfdMediaPicker};
use crate::media::TemplateSet;
use crate::ui::composer;
use crate::ui::notifications::{self, Notification, Topic};
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    composer: composer::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    theme: AppTheme,
    picker: Arc<dyn MediaPicker>,
    permission_gate: Arc<dyn PermissionGate>,
    /// Options handed to the picker and to photo decoding.
    pick_options: PickOptions,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("card", self.composer.card())
            .field("theme_mode", &self.theme.mode)
            .field("pick_options", &self.pick_options)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 600;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Card defaults from the configuration, overridden by the command line.
fn resolve_card_defaults(flags: &Flags, config: &Config) -> CardDefaults {
    let mut defaults = config.composer.card_defaults();

    if let Some(text) = flags.text.as_ref().filter(|text| !text.trim().is_empty()) {
        defaults.text.clone_from(text);
    }

    if let Some(index) = flags.template {
        match TemplateIndex::try_new(index) {
            Ok(template) => defaults.template = template,
            Err(err) => tracing::warn!(%err, "ignoring --template"),
        }
    }

    defaults
}

impl App {
    /// Initializes application state and kicks off the startup tasks: the
    /// permission request and template rendering.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let picker = RfdMediaPicker::new().with_labels(
            i18n.tr("picker-dialog-title"),
            i18n.tr("picker-filter-images"),
        );
        let gate = FsPermissionGate::new();

        let mut app = Self::with_ports(&flags, &config, i18n, Arc::new(picker), Arc::new(gate));

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(Topic::Config, key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            template = app.composer.card().template().value(),
            "card composer started"
        );

        let task = app.startup_tasks();
        (app, task)
    }

    /// Builds the application around explicit collaborators.
    pub fn with_ports(
        flags: &Flags,
        config: &Config,
        i18n: I18n,
        picker: Arc<dyn MediaPicker>,
        permission_gate: Arc<dyn PermissionGate>,
    ) -> Self {
        Self {
            i18n,
            composer: composer::State::new(resolve_card_defaults(flags, config)),
            notifications: notifications::Manager::new(),
            theme: AppTheme::new(config.general.theme_mode),
            picker,
            permission_gate,
            pick_options: config.picker.pick_options(),
        }
    }

    fn startup_tasks(&self) -> Task<Message> {
        let permission = Task::perform(
            use_case::request_permission(self.permission_gate.as_ref()),
            Message::PermissionResolved,
        );
        let templates = Task::perform(
            async {
                tokio::task::spawn_blocking(TemplateSet::load)
                    .await
                    .unwrap_or_else(|err| Err(Error::Svg(err.to_string())))
            },
            Message::TemplatesLoaded,
        );

        Task::batch([permission, templates])
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(!self.notifications.is_empty()),
            subscription::create_animation_subscription(self.composer.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            composer: &mut self.composer,
            notifications: &mut self.notifications,
            picker: &self.picker,
            pick_options: self.pick_options,
        };

        match message {
            Message::Composer(composer_message) => {
                update::handle_composer_message(&mut ctx, composer_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PermissionResolved(status) => {
                update::handle_permission_resolved(&mut ctx, status);
                Task::none()
            }
            Message::ImagePicked(outcome) => update::handle_image_picked(&mut ctx, outcome),
            Message::PhotoLoaded { handle, result } => {
                update::handle_photo_loaded(&mut ctx, &handle, result);
                Task::none()
            }
            Message::TemplatesLoaded(result) => {
                update::handle_templates_loaded(&mut ctx, result);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            composer: &self.composer,
            notifications: &self.notifications,
            surface: self.theme.surface(),
        })
    }
}
