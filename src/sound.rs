use lc_workspace::{
    config::Config,
    notify::{Event, Notifier},
};
use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

/// Ringtone playback through an external player. Spawned detached and
/// never awaited; a missing player or file is silently ignored.
#[derive(Clone)]
pub struct Sound {
    player: Option<String>,
    pass: Option<PathBuf>,
    send: Option<PathBuf>,
}

impl Sound {
    pub fn from_config(config: &Config) -> Self {
        Sound {
            player: config.sound_player.clone(),
            pass: config.pass_ringtone.clone(),
            send: config.send_ringtone.clone(),
        }
    }
    fn play(&self, ringtone: &Option<PathBuf>) {
        if let (Some(player), Some(path)) = (&self.player, ringtone) {
            let _ = Command::new(player)
                .arg(path)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
        }
    }
}

impl Notifier for Sound {
    fn notify(&self, event: Event) {
        match event {
            Event::Sent => self.play(&self.send),
            Event::Accepted => self.play(&self.pass),
        }
    }
}
