//! Tool registry.

use std::sync::Arc;

use cabinet_core::tools::Tool;

use crate::traits::CabinetTool;

/// Registry of the tools bound to one agent.
///
/// Insertion order is preserved so the definitions handed to the model are
/// stable across turns.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn CabinetTool>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Later registrations shadow earlier ones by name.
    pub fn register(&mut self, tool: Arc<dyn CabinetTool>) {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(tool);
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn CabinetTool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// Whether a tool is registered.
    pub fn has(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name() == name)
    }

    /// Schema definitions for every registered tool, in registration order.
    pub fn definitions(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
