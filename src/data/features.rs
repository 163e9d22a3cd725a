use std::num::NonZeroUsize;

use super::dataset::Dataset;

/// Expands `dataset` into polynomial terms of each feature up to `degree`,
/// prepending a constant bias column.
///
/// Column 0 of every output row is 1.0; the k-th power of source column
/// `item` lands at column `1 + feature_count * (k - 1) + item`, so the output
/// width is `feature_count * degree + 1`. Degree 1 yields the original
/// columns behind the bias, not a passthrough.
///
/// The transform is purely functional: the input dataset is untouched and
/// labels are carried over by reference.
pub fn polynomial_map(dataset: &Dataset, degree: NonZeroUsize) -> Dataset {
    let degree = degree.get();
    let source_count = dataset.feature_count();
    let mapped_count = source_count * degree + 1;
    let examples = dataset.examples();

    let mut features = vec![0.0f32; examples * mapped_count];
    for (source_row, out) in dataset.rows().zip(features.chunks_exact_mut(mapped_count)) {
        out[0] = 1.0;
        for (item, &value) in source_row.iter().enumerate() {
            for k in 1..=degree {
                out[1 + source_count * (k - 1) + item] = value.powi(k as i32);
            }
        }
    }

    Dataset::new(features, dataset.share_labels(), mapped_count, examples)
}
