// SPDX-License-Identifier: MPL-2.0
//! Runs a scripted check-in against a simulated camera and prints each screen.

use goalsy_checkin::app::{App, Message, Screen};
use goalsy_checkin::application::port::{DeviceError, ProfileDirectory};
use goalsy_checkin::config::{self, CheckInSettings};
use goalsy_checkin::error::{Error, Result};
use goalsy_checkin::domain::profile::NewProfile;
use goalsy_checkin::infrastructure::{InMemoryProfileDirectory, ScriptedCamera};
use goalsy_checkin::ui::checkin::{self, GestureEvent};
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug)]
struct Flags {
    settle_ms: Option<u64>,
    fail_back: bool,
    fail_front: bool,
    config_path: Option<PathBuf>,
}

impl Flags {
    fn parse() -> Result<Self> {
        let mut args = pico_args::Arguments::from_env();
        let flags = Flags {
            settle_ms: args
                .opt_value_from_str("--settle-ms")
                .map_err(|e| Error::Config(e.to_string()))?,
            fail_back: args.contains("--fail-back"),
            fail_front: args.contains("--fail-front"),
            config_path: args
                .opt_value_from_str("--config")
                .map_err(|e| Error::Config(e.to_string()))?,
        };
        let rest = args.finish();
        if !rest.is_empty() {
            return Err(Error::Config(format!("unexpected arguments: {rest:?}")));
        }
        Ok(flags)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = Flags::parse()?;
    let mut config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if flags.settle_ms.is_some() {
        config.settle_delay_ms = flags.settle_ms;
    }
    let settings = CheckInSettings::from(&config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(run(settings, &flags))
}

async fn run(settings: CheckInSettings, flags: &Flags) -> Result<()> {
    let profiles = InMemoryProfileDirectory::new();
    let user = profiles
        .create_user(
            "demo-uid",
            NewProfile {
                username: "Demo".into(),
                display_name: "Demo User".into(),
                email: "demo@example.com".into(),
                bio: None,
            },
        )
        .await?;

    let mut camera = ScriptedCamera::new();
    if flags.fail_back {
        camera = camera.then_fail(DeviceError::Timeout);
    } else {
        camera = camera.then_ok("sim://back/demo.jpg");
        if flags.fail_front {
            camera = camera.then_fail(DeviceError::Hardware("front lens unavailable".into()));
        }
    }

    let mut app = App::new(Rc::new(camera), settings);
    app.update(Message::StartCheckIn);
    let Some(check_in) = app.check_in() else {
        return Err(Error::Config("check-in screen did not open".into()));
    };
    println!("{:#?}", check_in.view());

    let outcome = check_in.capture().await;
    app.sync();
    log::info!("capture outcome: {outcome:?}");
    println!("{:#?}", check_in.view());

    if outcome.pair().is_none() {
        // A real user would press the shutter again; the demo stops here.
        app.update(Message::CheckIn(checkin::Message::Cancel));
    } else {
        app.update(Message::CheckIn(checkin::Message::Gesture(
            GestureEvent::SecondaryDown,
        )));
        app.update(Message::CheckIn(checkin::Message::Gesture(
            GestureEvent::SecondaryUp,
        )));
        println!("{:#?}", check_in.view());
        app.update(Message::CheckIn(checkin::Message::Confirm));
    }

    debug_assert_eq!(app.screen(), Screen::Home);
    match app.last_check_in() {
        Some(pair) => println!(
            "@{} checked in with {} and {}",
            user.username, pair.back, pair.front
        ),
        None => println!("no check-in recorded"),
    }
    println!("{:#?}", app.diagnostics().summary());
    Ok(())
}
