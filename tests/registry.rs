use libcmd::interp::error::Error;
use libcmd::interp::{Interpreter, Sink};
use libcmd::registry::{COMMAND_SLOTS, Command, Registry};

struct NullSink;

impl Sink for NullSink {
    fn write(&mut self, _text: &str) {}
}

/// Inert command with just a name.
struct Named {
    name: &'static str,
}

impl Named {
    fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl<S: Sink> Command<S> for Named {
    fn name(&self) -> &'static str {
        self.name
    }

    fn short_help(&self) -> &'static str {
        "does nothing"
    }

    fn long_help(&self) -> &'static str {
        "SYNTAX: (test only)\r\n"
    }

    fn execute<'a>(&'a self, _interp: &mut Interpreter<'a, S>, _argv: &[&str]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_empty() {
        let registry: Registry<'_, NullSink> = Registry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.find("anything").is_none());
    }

    #[test]
    fn test_register_preserves_insertion_order() {
        let first = Named::new("first");
        let second = Named::new("second");
        let mut registry: Registry<'_, NullSink> = Registry::new();
        registry.register(&first).unwrap();
        registry.register(&second).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(0).map(|c| c.name()), Some("first"));
        assert_eq!(registry.get(1).map(|c| c.name()), Some("second"));
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn test_find_exact_name() {
        let set = Named::new("set");
        let mut registry: Registry<'_, NullSink> = Registry::new();
        registry.register(&set).unwrap();

        assert_eq!(registry.find("set").map(|c| c.name()), Some("set"));
    }

    #[test]
    fn test_find_by_prefix() {
        let help = Named::new("help");
        let mut registry: Registry<'_, NullSink> = Registry::new();
        registry.register(&help).unwrap();

        for text in ["h", "he", "hel", "help"] {
            assert_eq!(registry.find(text).map(|c| c.name()), Some("help"));
        }
        assert!(registry.find("helpx").is_none());
        assert!(registry.find("x").is_none());
    }

    #[test]
    fn test_ambiguous_prefix_resolves_to_first_registered() {
        let setup = Named::new("setup");
        let set = Named::new("set");
        let mut registry: Registry<'_, NullSink> = Registry::new();
        registry.register(&setup).unwrap();
        registry.register(&set).unwrap();

        // Never shortest-name: "se" hits whatever came first.
        assert_eq!(registry.find("se").map(|c| c.name()), Some("setup"));
        assert_eq!(registry.find("set").map(|c| c.name()), Some("setup"));
        assert_eq!(registry.find("setu").map(|c| c.name()), Some("setup"));
    }

    #[test]
    fn test_empty_text_matches_first_registered() {
        let set = Named::new("set");
        let get = Named::new("get");
        let mut registry: Registry<'_, NullSink> = Registry::new();
        registry.register(&set).unwrap();
        registry.register(&get).unwrap();

        assert_eq!(registry.find("").map(|c| c.name()), Some("set"));
    }

    #[test]
    fn test_register_beyond_capacity_fails_without_side_effects() {
        let commands: Vec<Named> = (0..COMMAND_SLOTS)
            .map(|i| Named::new(format!("cmd{i:02}").leak()))
            .collect();
        let overflow = Named::new("overflow");
        let mut registry: Registry<'_, NullSink> = Registry::new();

        for command in &commands {
            registry.register(command).unwrap();
        }
        assert_eq!(registry.len(), COMMAND_SLOTS);

        assert_eq!(registry.register(&overflow), Err(Error::RegistryFull));

        // Prior entries unchanged and still findable.
        assert_eq!(registry.len(), COMMAND_SLOTS);
        assert_eq!(registry.find("cmd00").map(|c| c.name()), Some("cmd00"));
        assert_eq!(
            registry.find("cmd15").map(|c| c.name()),
            Some("cmd15"),
        );
        assert!(registry.find("overflow").is_none());
    }

    #[test]
    fn test_interpreter_register_forwards_capacity_error() {
        let commands: Vec<Named> = (0..COMMAND_SLOTS)
            .map(|i| Named::new(format!("word{i:02}").leak()))
            .collect();
        let overflow = Named::new("overflow");
        let mut cmd = Interpreter::new(NullSink);

        for command in &commands {
            cmd.register(command).unwrap();
        }

        assert_eq!(cmd.register(&overflow), Err(Error::RegistryFull));
        assert_eq!(cmd.registry().len(), COMMAND_SLOTS);
    }
}
