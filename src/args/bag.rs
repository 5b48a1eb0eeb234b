//! Round-robin bags of bindings sharing a name.

use std::collections::HashMap;

use crate::args::binding::Binding;

/// Bindings declared under one name, handed out in cyclic order.
#[derive(Debug)]
pub struct BindingBag<'b, 'r> {
    bindings: Vec<&'b Binding<'r>>,
    cursor: usize,
}

impl<'b, 'r> BindingBag<'b, 'r> {
    fn new(first: &'b Binding<'r>) -> Self {
        Self {
            bindings: vec![first],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Always false for bags built by [`group_bindings`].
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Whether any template token has drawn from this bag yet.
    pub fn is_used(&self) -> bool {
        self.cursor > 0
    }

    /// The binding for this reference; wraps around after the last one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &'b Binding<'r> {
        let binding = self.bindings[self.cursor % self.bindings.len()];
        self.cursor += 1;
        binding
    }
}

/// Partition bindings by name, keeping declaration order inside each bag.
pub fn group_bindings<'b, 'r>(bindings: &'b [Binding<'r>]) -> HashMap<&'b str, BindingBag<'b, 'r>> {
    let mut bags: HashMap<&'b str, BindingBag<'b, 'r>> = HashMap::new();
    for binding in bindings {
        bags.entry(binding.name.as_str())
            .and_modify(|bag| bag.bindings.push(binding))
            .or_insert_with(|| BindingBag::new(binding));
    }
    bags
}
