use dabble_engine::render::StatusSink;

/// Holds the latest render status until the next frame shows it.
#[derive(Debug, Default)]
pub struct StatusLine {
    pending: Option<String>,
}

impl StatusLine {
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }
}

impl StatusSink for StatusLine {
    fn publish(&mut self, status: &str) {
        self.pending = Some(status.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_status_is_kept() {
        let mut line = StatusLine::default();
        line.publish("shapes: 1 ms: 0 fps: -");
        line.publish("shapes: 2 ms: 0 fps: -");
        assert_eq!(line.take().as_deref(), Some("shapes: 2 ms: 0 fps: -"));
        assert_eq!(line.take(), None);
    }
}
