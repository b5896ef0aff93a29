//! Shared plumbing for the wardrobe workspace: logging setup and small HTTP types.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn logging_init_is_repeatable() {
        utils::logging::init_logging_default();
        utils::logging::init_logging_default();
        utils::logging::init_logging_json();
    }
}
