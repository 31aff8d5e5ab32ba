use light_bitvec::{BitOrder, BitVec};

/// Hands out the lowest free slot of a slot table whose occupancy bitmap is
/// stored in big endian bit order.
fn claim(bitmap: &mut BitVec<'_>) -> Option<usize> {
    let slot = bitmap.find_first_zero(0)?;
    bitmap.set(slot);
    Some(slot)
}

fn main() {
    const SLOTS: usize = 128;
    let mut table = [0u8; SLOTS / 8];

    {
        let mut bitmap = BitVec::fixed(&mut table, BitOrder::Big).unwrap();
        for _ in 0..5 {
            println!("claimed slot {:?}", claim(&mut bitmap));
        }
        bitmap.unset(2);
        println!("released slot 2, next claim {:?}", claim(&mut bitmap));
        println!("in use: {:?}", bitmap.iter_ones().collect::<Vec<_>>());
    }

    println!("persisted bytes: {table:?}");

    let mut grown = table;
    let mut bitmap = BitVec::growable(&mut grown, BitOrder::Big).unwrap();
    bitmap.set(SLOTS + 3);
    println!(
        "after growth: {} words, detached {}, last slot {:?}",
        bitmap.word_len(),
        bitmap.is_detached(),
        bitmap.find_last_one()
    );
}
