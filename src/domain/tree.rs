use termtree::Tree;
use tracing::instrument;

use crate::domain::format::PriceFormat;
use crate::domain::orderable::Orderable;

/// Renders an order participant and everything below it as a `termtree`.
///
/// Each node is labelled `<label> : <amount>`, where the amount already
/// includes the node's children.
pub trait OrderTree {
    fn to_tree(&self, format: &PriceFormat) -> Tree<String>;
}

impl<T: Orderable + ?Sized> OrderTree for T {
    #[instrument(level = "trace", skip_all)]
    fn to_tree(&self, format: &PriceFormat) -> Tree<String> {
        let root = format!("{} : {}", self.label(), format.render(self.amount()));

        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree(format))
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}
