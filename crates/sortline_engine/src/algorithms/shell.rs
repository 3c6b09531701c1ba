//! Shell sort over Knuth's gap sequence (1, 4, 13, 40, ...).

use crate::recorder::Recorder;
use sortline_core::SortValue;
use sortline_ledger::Highlights;

pub(crate) fn sort<V: SortValue>(rec: &mut Recorder<V>, mut arr: Vec<V>) -> Vec<V> {
    rec.note(&arr, "Start Shell Sort (Knuth's sequence)");
    if rec.short_circuit(&arr) {
        return arr;
    }

    let n = arr.len();
    let mut gap = 1;
    while gap < n / 3 {
        gap = gap * 3 + 1;
    }

    let mut pass = 0;
    while gap >= 1 {
        pass += 1;
        rec.record(
            &arr,
            format!("Pass {pass}: Gap = {gap}"),
            Highlights::none().comparing(0..n),
        );

        for i in gap..n {
            let key = arr[i];
            rec.record(
                &arr,
                format!("Inserting {key} with gap {gap}"),
                Highlights::none().comparing([i]),
            );
            let mut hole = i;
            while hole >= gap && rec.compare(arr[hole - gap], key) {
                arr[hole] = arr[hole - gap];
                hole -= gap;
                rec.count_move();
                rec.record(
                    &arr,
                    format!("Shifted {} right by gap {gap}", arr[hole]),
                    Highlights::none().swapping([hole, hole + gap]),
                );
            }
            arr[hole] = key;
            rec.count_move();
        }
        gap /= 3;
    }

    rec.note(&arr, "Shell Sort completed!");
    arr
}
