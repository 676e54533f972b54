use std::path::PathBuf;

use crate::structures::Platform;

const LINUX_NAMES: &[&str] = &[
  "Discord",
  "DiscordPTB",
  "DiscordCanary",
  "DiscordDevelopment",
  "discord",
  "discordptb",
  "discordcanary",
  "discorddevelopment",
  "discord-ptb",
  "discord-canary",
  "discord-development",
  // Flatpak
  "com.discordapp.Discord",
  "com.discordapp.DiscordPTB",
  "com.discordapp.DiscordCanary",
  "com.discordapp.DiscordDevelopment",
];

const WINDOWS_NAMES: &[&str] = &[
  "Discord",
  "DiscordPTB",
  "DiscordCanary",
  "DiscordDevelopment",
];

const MACOS_NAMES: &[&str] = &[
  "Discord.app",
  "Discord PTB.app",
  "Discord Canary.app",
  "Discord Development.app",
];

impl Platform {
  /// The layout of the operating system we were compiled for
  pub fn current() -> Self {
    if cfg!(target_os = "windows") {
      Platform::Windows
    } else if cfg!(target_os = "macos") {
      Platform::MacOs
    } else {
      Platform::Linux
    }
  }

  /// Directory names a Discord install may have below a search root
  pub fn candidate_names(&self) -> &'static [&'static str] {
    match self {
      Platform::Linux => LINUX_NAMES,
      Platform::Windows => WINDOWS_NAMES,
      Platform::MacOs => MACOS_NAMES,
    }
  }

  pub fn is_candidate(&self, name: &str) -> bool {
    self.candidate_names().contains(&name)
  }

  /// Where Discord gets installed by default, derived from the current environment.
  ///
  /// Directories relative to an unknown home are left out.
  pub fn default_search_roots(&self) -> Vec<PathBuf> {
    self.search_roots_from(dirs::home_dir(), dirs::data_local_dir())
  }

  pub(crate) fn search_roots_from(&self, home: Option<PathBuf>, local_data: Option<PathBuf>) -> Vec<PathBuf> {
    match self {
      Platform::Linux => {
        let mut roots: Vec<PathBuf> = vec![
          "/usr/share".into(),
          "/usr/local/share".into(),
          "/usr/lib64".into(),
          "/opt".into(),
        ];
        if let Some(home) = &home {
          roots.push(home.join(".local/share"));
        }
        roots.push("/var/lib/flatpak/app".into());
        if let Some(home) = &home {
          roots.push(home.join(".local/share/flatpak/app"));
          // https://github.com/diced/dvm
          roots.push(home.join(".dvm"));
        }
        roots
      },
      Platform::Windows => local_data.into_iter().collect(),
      Platform::MacOs => {
        let mut roots: Vec<PathBuf> = vec!["/Applications".into()];
        if let Some(home) = &home {
          roots.push(home.join("Applications"));
        }
        roots
      },
    }
  }
}
