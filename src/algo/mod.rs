/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use planarity::algo::*;
```
and gain access to traversals, connected components and planarity testing.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod connectivity;
mod planarity;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use planarity::*;
pub use traversal::*;
