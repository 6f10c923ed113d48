use crate::{
    constants::{HashChains, Node, D_PBLC},
    hasher::HashChain,
    util::ustr::u32str,
};

/// Walks every chain `i` from `initial_values[i]` over the steps `bounds(i) = (from, to)`.
///
/// The result is positional: entry `i` always belongs to chain `i`, regardless of
/// whether the chains are evaluated on one thread or split across several.
pub fn walk_chains<H, F>(
    identifier: &[u8],
    leaf_index: u32,
    initial_values: &[Node],
    bounds: F,
) -> HashChains
where
    H: HashChain,
    F: Fn(u16) -> (usize, usize) + Sync,
{
    let mut result = HashChains::new();
    result.resize(initial_values.len(), Node::new());

    #[cfg(feature = "parallel")]
    walk_parallel::<H, F>(identifier, leaf_index, initial_values, &bounds, &mut result);
    #[cfg(not(feature = "parallel"))]
    walk_sequential::<H, F>(identifier, leaf_index, initial_values, &bounds, 0, &mut result);

    result
}

fn walk_sequential<H, F>(
    identifier: &[u8],
    leaf_index: u32,
    initial_values: &[Node],
    bounds: &F,
    offset: usize,
    output: &mut [Node],
) where
    H: HashChain,
    F: Fn(u16) -> (usize, usize) + Sync,
{
    let mut hasher = H::default();

    for (index, (initial, target)) in initial_values.iter().zip(output.iter_mut()).enumerate() {
        let hash_chain_id = (offset + index) as u16;
        let (from, to) = bounds(hash_chain_id);
        *target = hasher.do_hash_chain(
            identifier,
            leaf_index,
            hash_chain_id,
            initial.as_slice(),
            from,
            to,
        );
    }
}

#[cfg(feature = "parallel")]
fn walk_parallel<H, F>(
    identifier: &[u8],
    leaf_index: u32,
    initial_values: &[Node],
    bounds: &F,
    output: &mut [Node],
) where
    H: HashChain,
    F: Fn(u16) -> (usize, usize) + Sync,
{
    let threads = std::thread::available_parallelism()
        .map(|threads| threads.get())
        .unwrap_or(1);
    let chunk_size = (output.len() + threads - 1) / threads;

    if threads == 1 || chunk_size == 0 {
        return walk_sequential::<H, F>(identifier, leaf_index, initial_values, bounds, 0, output);
    }

    tracing::trace!(threads, chunk_size, "walking hash chains in parallel");

    let scope_result = crossbeam::scope(|scope| {
        for (chunk_index, (inputs, outputs)) in initial_values
            .chunks(chunk_size)
            .zip(output.chunks_mut(chunk_size))
            .enumerate()
        {
            let offset = chunk_index * chunk_size;
            scope.spawn(move |_| {
                walk_sequential::<H, F>(identifier, leaf_index, inputs, bounds, offset, outputs)
            });
        }
    });

    if let Err(panic) = scope_result {
        std::panic::resume_unwind(panic);
    }
}

/// `H(I || u32str(q) || D_PBLC || tops[0] || ... || tops[p-1])`
pub fn hash_chain_tops<H: HashChain>(identifier: &[u8], leaf_index: u32, tops: &[Node]) -> Node {
    let mut hasher = H::default();

    hasher.update(identifier);
    hasher.update(&u32str(leaf_index));
    hasher.update(&D_PBLC);

    for top in tops.iter() {
        hasher.update(top.as_slice());
    }

    hasher.finalize()
}
