use serde::{Deserialize, Serialize};

use canemart_core::RecordId;

/// One cart line. Quantity is always >= 1; a line that would drop below 1
/// must be removed explicitly instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: RecordId,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

/// In-memory cart aggregator, ordered by insertion and keyed by item id.
///
/// All operations are synchronous; nothing here survives a session restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of an item: merge into an existing line by id, or append
    /// a new line with quantity 1. Quantity saturates at `u32::MAX`.
    pub fn add(&mut self, id: RecordId, name: impl Into<String>, unit_price: u64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            id,
            name: name.into(),
            unit_price,
            quantity: 1,
        });
    }

    /// Set a line's quantity. A target below 1 is a no-op (use [`remove`]);
    /// an unknown id is also a no-op.
    ///
    /// [`remove`]: Cart::remove
    pub fn set_quantity(&mut self, id: RecordId, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        }
    }

    /// Delete a line unconditionally. Returns whether a line was removed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != before
    }

    /// Σ unit_price × quantity over all lines.
    ///
    /// Prices are unbounded upstream (any digit run coerces), so the sum
    /// saturates at `u64::MAX` instead of wrapping.
    pub fn total(&self) -> u64 {
        self.lines.iter().fold(0u64, |acc, l| {
            acc.saturating_add(l.unit_price.saturating_mul(u64::from(l.quantity)))
        })
    }

    /// Σ quantity over all lines (the cart badge count). Saturating.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> RecordId {
        RecordId::from_uuid(uuid_from(n))
    }

    fn uuid_from(n: u128) -> uuid::Uuid {
        uuid::Uuid::from_u128(n)
    }

    #[test]
    fn add_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add(id(1), "White Sugar", 45);
        cart.add(id(1), "White Sugar", 45);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn distinct_ids_get_distinct_lines_in_insertion_order() {
        let mut cart = Cart::new();
        cart.add(id(2), "Brown Sugar", 55);
        cart.add(id(1), "White Sugar", 45);

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Brown Sugar", "White Sugar"]);
    }

    #[test]
    fn set_quantity_zero_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(id(1), "White Sugar", 45);
        cart.set_quantity(id(1), 0);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn set_quantity_on_unknown_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(id(1), "White Sugar", 45);
        cart.set_quantity(id(9), 4);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn remove_deletes_unconditionally() {
        let mut cart = Cart::new();
        cart.add(id(1), "White Sugar", 45);
        cart.set_quantity(id(1), 7);

        assert!(cart.remove(id(1)));
        assert!(cart.is_empty());
        assert!(!cart.remove(id(1)));
    }

    #[test]
    fn total_is_sum_of_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(id(1), "White Sugar", 45);
        cart.set_quantity(id(1), 3);
        cart.add(id(2), "Jaggery", 70);

        assert_eq!(cart.total(), 45 * 3 + 70);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        // A 20-digit price string coerces to a value this large upstream.
        let huge = u64::MAX / 2 + 1;
        let mut cart = Cart::new();
        cart.add(id(1), "Bulk Cane", huge);
        cart.add(id(1), "Bulk Cane", huge);

        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), u64::MAX);

        cart.add(id(2), "Jaggery", 70);
        assert_eq!(cart.total(), u64::MAX);
    }

    #[test]
    fn add_saturates_quantity_at_the_cap() {
        let mut cart = Cart::new();
        cart.add(id(1), "White Sugar", 45);
        cart.set_quantity(id(1), u32::MAX);
        cart.add(id(1), "White Sugar", 45);

        assert_eq!(cart.lines()[0].quantity, u32::MAX);
        assert_eq!(cart.item_count(), u32::MAX);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u128, u64),
            SetQuantity(u128, u32),
            Remove(u128),
        }

        fn any_price() -> impl Strategy<Value = u64> {
            // Mostly everyday prices, sometimes values near the top of the
            // range, since upstream coercion accepts any digit run.
            prop_oneof![
                4 => 1u64..1000,
                1 => (u64::MAX - 1000)..u64::MAX,
            ]
        }

        fn any_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u128..6, any_price()).prop_map(|(i, p)| Op::Add(i, p)),
                (0u128..6, 0u32..20).prop_map(|(i, q)| Op::SetQuantity(i, q)),
                (0u128..6).prop_map(Op::Remove),
            ]
        }

        proptest! {
            /// Property: after any op sequence, the total equals the sum over
            /// current lines and every quantity stays >= 1.
            #[test]
            fn invariants_hold_under_any_op_sequence(
                ops in proptest::collection::vec(any_op(), 0..60)
            ) {
                let mut cart = Cart::new();
                for op in ops {
                    match op {
                        Op::Add(i, p) => cart.add(id(i), format!("item {i}"), p),
                        Op::SetQuantity(i, q) => cart.set_quantity(id(i), q),
                        Op::Remove(i) => {
                            cart.remove(id(i));
                        }
                    }

                    let expected: u64 = cart.lines().iter().fold(0u64, |acc, l| {
                        acc.saturating_add(l.unit_price.saturating_mul(u64::from(l.quantity)))
                    });
                    prop_assert_eq!(cart.total(), expected);
                    prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));

                    // One line per id.
                    let mut ids: Vec<_> = cart.lines().iter().map(|l| l.id).collect();
                    ids.sort_by_key(|r| *r.as_uuid());
                    ids.dedup();
                    prop_assert_eq!(ids.len(), cart.lines().len());
                }
            }
        }
    }
}
