//! Scoped-thread fan-out for the pairwise and triplet phases.

/// Map `f` over `items` on up to `workers` scoped threads.
///
/// Items are split into contiguous chunks, one per thread, and results are returned in
/// input order, so the outcome is identical to a sequential map. Small inputs or a single
/// worker run inline.
pub fn parallel_map<T, R, F>(items: &[T], workers: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    if items.is_empty() {
        return Vec::new();
    }
    let chunk_size = items.len().div_ceil(workers.max(1));
    if workers <= 1 || chunk_size >= items.len() {
        return items.iter().map(&f).collect();
    }

    let f = &f;
    std::thread::scope(|s| {
        let handles: Vec<_> = items
            .chunks(chunk_size)
            .map(|chunk| s.spawn(move || chunk.iter().map(f).collect::<Vec<R>>()))
            .collect();

        let mut out = Vec::with_capacity(items.len());
        for h in handles {
            match h.join() {
                Ok(part) => out.extend(part),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        out
    })
}
