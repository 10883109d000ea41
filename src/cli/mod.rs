//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! objectsapi binary.

use clap::{Parser, Subcommand};

use crate::client::DEFAULT_API_URL;
use crate::models::{parse_attribute, AttributeValue, Attributes, ObjectRequest};

/// Objects API command-line interface.
///
/// Without a subcommand, runs the full create/read/update/delete walkthrough.
#[derive(Parser, Debug)]
#[command(name = "objectsapi", about = "restful-api.dev objects CLI", version)]
pub struct Cli {
    /// API root; the collection is served at `<BASE_URL>/objects`.
    #[arg(long, global = true, env = "OBJECTS_API_URL", default_value = DEFAULT_API_URL)]
    pub base_url: String,

    /// Output results as JSON instead of human-readable text (ignored by the
    /// walkthrough).
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run List, Create, Get, Update and Delete in sequence (the default).
    Walkthrough,

    /// List objects.
    List {
        /// Only list these ids (repeatable).
        #[arg(long = "id")]
        ids: Vec<String>,
    },

    /// Get a single object by id.
    Get {
        /// The object id.
        id: String,
    },

    /// Create an object.
    Create {
        /// Name of the new object.
        #[arg(long)]
        name: String,

        /// Attribute as key=value (repeatable). Numbers are sent as numbers.
        #[arg(long = "attr", value_parser = parse_attribute)]
        attrs: Vec<(String, AttributeValue)>,
    },

    /// Replace an object's name and attributes.
    Update {
        /// The object id.
        id: String,

        /// New name.
        #[arg(long)]
        name: String,

        /// Attribute as key=value (repeatable). Numbers are sent as numbers.
        #[arg(long = "attr", value_parser = parse_attribute)]
        attrs: Vec<(String, AttributeValue)>,
    },

    /// Delete an object by id.
    Delete {
        /// The object id.
        id: String,
    },
}

/// Build a request body from `--name` and `--attr` values.
pub fn build_request(name: String, attrs: Vec<(String, AttributeValue)>) -> ObjectRequest {
    ObjectRequest {
        name,
        data: attrs.into_iter().collect::<Attributes>(),
    }
}
