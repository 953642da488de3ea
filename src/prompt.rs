// ABOUTME: Capability interface for interactive choices.
// ABOUTME: Implemented by the binary's terminal prompts; never used by dispatch or sequencing.

use crate::error::Result;

/// Something the operator picks from a list of options.
pub trait Chooser {
    type Item;

    fn list_options(&self) -> Result<Vec<Self::Item>>;

    fn choose(&self, options: Vec<Self::Item>) -> Result<Self::Item>;

    fn pick(&self) -> Result<Self::Item> {
        let options = self.list_options()?;
        self.choose(options)
    }
}
