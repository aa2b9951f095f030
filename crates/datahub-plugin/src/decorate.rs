//! Prop-injection decoration.
//!
//! Wraps a component so a fixed extra prop set is merged in at render
//! time, transparent to the component's declared inputs. Host-owned
//! fields are authoritative: on key collision the injected value always
//! wins over whatever the caller supplied.

use std::sync::Arc;

use datahub_ui::{Component, ComponentKind, Node, Props};

/// Returns a new component that merges `injected` into every render.
///
/// Merge order: caller props first, injected props second, so injected
/// keys win. Caller-supplied children pass through positionally and are
/// never merged or overridden. The original component is left untouched
/// and remains independently usable.
pub fn with_injected_props(component: Arc<dyn Component>, injected: Props) -> Arc<dyn Component> {
    Arc::new(InjectedProps {
        inner: component,
        injected,
    })
}

struct InjectedProps {
    inner: Arc<dyn Component>,
    injected: Props,
}

impl Component for InjectedProps {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn kind(&self) -> ComponentKind {
        self.inner.kind()
    }

    fn render(&self, caller: &Props) -> Node {
        let mut merged = Props::new();
        for (key, value) in caller.iter() {
            merged.insert(key.clone(), value.clone());
        }
        for (key, value) in self.injected.iter() {
            merged.insert(key.clone(), value.clone());
        }
        merged.set_children(caller.children().to_vec());
        self.inner.render(&merged)
    }
}
