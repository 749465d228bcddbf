/// DOM events that the site attaches handlers for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Submit,
    Input,
    Change,
    HashChange,

    /// Any other event, stored by its JS name.
    Other(String),
}

impl EventType {
    /// Resolve the event named by a handler attribute key, eg `onClick` or `onsubmit`. Returns
    /// [`None`] if the key is not prefixed with `on`, or if nothing follows the prefix.
    pub fn from_handler_key(key: &str) -> Option<Self> {
        let name = key.strip_prefix("on")?;

        if name.is_empty() {
            return None;
        }

        Some(Self::from(name.to_lowercase().as_str()))
    }

    /// Event name for use in JS listeners.
    pub fn as_str(&self) -> &str {
        use EventType::*;

        match self {
            Click => "click",
            Submit => "submit",
            Input => "input",
            Change => "change",
            HashChange => "hashchange",
            Other(name) => name,
        }
    }
}

impl From<&str> for EventType {
    fn from(name: &str) -> Self {
        use EventType::*;

        match name {
            "click" => Click,
            "submit" => Submit,
            "input" => Input,
            "change" => Change,
            "hashchange" => HashChange,
            other => Other(other.to_string()),
        }
    }
}

impl From<EventType> for String {
    /// Convert to an event name for use in JS listeners.
    fn from(event: EventType) -> Self {
        event.as_str().to_string()
    }
}
