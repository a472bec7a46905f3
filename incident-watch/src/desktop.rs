use incident_core::alert::{AlertSink, Permission};
use std::process::Command;

/// Desktop alert sink over `notify-send`. Best-effort: dispatch spawns and
/// never waits, and a headless session or missing binary reads as Denied.
pub struct DesktopAlerts {
    permission: Permission,
    icon: Option<String>,
}

impl DesktopAlerts {
    pub fn new(icon: Option<String>) -> Self {
        Self {
            permission: Permission::Undetermined,
            icon,
        }
    }

    fn capability_available() -> bool {
        let has_display = std::env::var_os("DISPLAY").is_some()
            || std::env::var_os("WAYLAND_DISPLAY").is_some();
        if !has_display {
            return false;
        }
        Command::new("notify-send").arg("--version").output().is_ok()
    }
}

impl AlertSink for DesktopAlerts {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) -> Permission {
        self.permission = if Self::capability_available() {
            Permission::Granted
        } else {
            Permission::Denied
        };
        self.permission
    }

    fn dispatch(&mut self, title: &str, body: &str) {
        let mut cmd = Command::new("notify-send");
        if let Some(icon) = &self.icon {
            cmd.args(["--icon", icon]);
        }
        let _ = cmd
            .args(["--app-name", "incident-watch", title, body])
            .spawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_undetermined() {
        let sink = DesktopAlerts::new(None);
        assert_eq!(sink.permission(), Permission::Undetermined);
    }

    #[test]
    fn request_resolves_to_a_definite_state() {
        let mut sink = DesktopAlerts::new(None);
        let resolved = sink.request_permission();
        assert_ne!(resolved, Permission::Undetermined);
        assert_eq!(sink.permission(), resolved);
    }
}
