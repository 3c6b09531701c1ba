//! Selection sort.

use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, mut arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Selection Sort");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    for i in 0..n {
        let mut min = i;
        rec.record(
            &arr,
            format!("Finding minimum in unsorted subarray [{i}:{n}]"),
            Highlights::none().comparing([i]).sorted(0..i),
        );

        for j in i + 1..n {
            rec.record(
                &arr,
                format!("Comparing {} with current min {}", arr[j], arr[min]),
                Highlights::none().comparing([min, j]).sorted(0..i),
            );
            if rec.compare(arr[min], arr[j]) {
                min = j;
                rec.record(
                    &arr,
                    format!("New minimum found: {}", arr[min]),
                    Highlights::none().comparing([min]).sorted(0..i),
                );
            }
        }

        if min != i {
            rec.swap(&mut arr, i, min);
            rec.record(
                &arr,
                format!(
                    "Swapped {} and {}. Position {i} is now sorted.",
                    arr[i], arr[min]
                ),
                Highlights::none().swapping([i, min]).sorted(0..=i),
            );
        } else {
            rec.record(
                &arr,
                format!("{} is already in correct position.", arr[i]),
                Highlights::none().sorted(0..=i),
            );
        }
    }

    rec.note(&arr, "Selection Sort completed!");
    arr
}
