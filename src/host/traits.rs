//! Host collaborator traits.

/// Operations the tracker consumes from the host application.
pub mod plugin_host;
