use log::debug;

/// Largest amount that can be spent buying exactly one model of every
/// garment without going over `budget`.
///
/// `prices[g]` lists the model prices for garment `g`. Returns `None` when
/// even the cheapest choice does not fit, or when a garment has no models.
/// With no garments at all nothing is spent.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::dynamic::wedding_shopping::maximum_spend;
///
/// let prices = vec![vec![2, 4], vec![1, 5], vec![3]];
/// assert_eq!(maximum_spend(10, &prices), Some(10));
/// assert_eq!(maximum_spend(5, &prices), None);
/// ```
///
/// # Complexity
/// * Time: O(budget * total number of models)
/// * Space: O(budget)
pub fn maximum_spend(budget: usize, prices: &[Vec<usize>]) -> Option<usize> {
    // spent[m] is true when exactly m can be spent on the garments seen so far
    let mut spent = vec![false; budget + 1];
    spent[0] = true;
    for models in prices {
        let mut next = vec![false; budget + 1];
        for (money, _) in spent.iter().enumerate().filter(|&(_, &ok)| ok) {
            for &price in models {
                if money + price <= budget {
                    next[money + price] = true;
                }
            }
        }
        spent = next;
    }
    let best = spent.iter().rposition(|&ok| ok);
    debug!(
        "maximum_spend: {} garments, budget {}, best {:?}",
        prices.len(),
        budget,
        best
    );
    best
}
