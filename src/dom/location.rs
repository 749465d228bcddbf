use wasm_bindgen::JsValue;
use web_sys::Node as WsNode;

/// Expresses a location in the DOM that [`web_sys::Node`]s are mounted into. The shell uses it to
/// own the root container.
#[derive(Clone)]
pub struct Location {
    /// The parent to mount the [`web_sys::Node`] within.
    parent: WsNode,
}

impl Location {
    /// Create a location from a parent.
    pub fn parent<N>(parent: &N) -> Self
    where
        N: AsRef<WsNode>,
    {
        Self {
            parent: parent.as_ref().clone(),
        }
    }

    /// Use the location to mount the provided [`web_sys::Node`], after any existing children.
    /// Assumes that the parent is mounted.
    pub fn mount<N>(&self, node: &N) -> Result<(), JsValue>
    where
        N: AsRef<WsNode>,
    {
        self.parent.insert_before(node.as_ref(), None)?;

        Ok(())
    }

    /// Remove every child of the parent.
    pub fn clear(&self) -> Result<(), JsValue> {
        while let Some(child) = self.parent.first_child() {
            self.parent.remove_child(&child)?;
        }

        Ok(())
    }
}
