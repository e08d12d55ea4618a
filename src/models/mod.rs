mod cart_line;
mod money;
mod order_draft;
mod product;
mod size;
mod stock;

pub use cart_line::CartLine;
pub use money::Money;
pub use order_draft::{OrderDraft, OrderTotals};
pub use product::{Product, ProductId};
pub use size::Size;
pub use stock::StockMap;
