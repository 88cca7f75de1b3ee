use super::{load_tools, CommandResult, EXIT_CATALOG};

pub fn run() -> CommandResult {
    match load_tools() {
        Ok(registry) => CommandResult::document("tools", &registry.definitions()),
        Err(error) => {
            CommandResult::failure("tools", "catalog_validation", error.to_string(), EXIT_CATALOG)
        }
    }
}
