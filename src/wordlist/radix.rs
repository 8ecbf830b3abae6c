//! Mixed-radix dice labels for list positions

/// Turn `num` into its digits in base `base`, most significant first.
///
/// Zero gives a single `0` digit. Digits may be `>= 10`:
/// `digits_of(127, 16)` is `[7, 15]`.
pub fn digits_of(num: u64, base: u64) -> Vec<u64> {
    debug_assert!(base >= 2, "base must be at least 2");
    let mut digits = Vec::new();
    let mut n = num;
    while n >= base {
        digits.push(n % base);
        n /= base;
    }
    digits.push(n);
    digits.reverse();
    digits
}

/// Dice label for list position `index`, like `"1-2-2-6-2"`.
///
/// Every digit of `index` in base `dice_sides` is shifted by one to give a
/// die face, and the sequence is left-padded with `1` up to `num_dice`
/// faces. Callers keep `index < dice_sides.pow(num_dice)`; larger indexes
/// are cut to their last `num_dice` faces.
pub fn dice_label(index: u64, num_dice: usize, dice_sides: u64, separator: &str) -> String {
    let faces: Vec<u64> = digits_of(index, dice_sides)
        .into_iter()
        .map(|d| d + 1)
        .collect();

    let mut padded = vec![1u64; num_dice.saturating_sub(faces.len())];
    let skip = faces.len().saturating_sub(num_dice);
    padded.extend_from_slice(&faces[skip..]);

    padded
        .iter()
        .map(|face| face.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Number of dice needed to address `length` list entries.
///
/// This is `ceil(log(length) / log(dice_sides))`, computed on integers so
/// exact powers (7776 entries, 6 sides) do not round up. A list with a
/// single entry still gets one die.
pub fn dice_count(length: usize, dice_sides: u64) -> usize {
    debug_assert!(dice_sides >= 2, "dice need at least 2 sides");
    let target = length as u128;
    let sides = dice_sides as u128;
    let mut count = 1;
    let mut reach = sides;
    while reach < target {
        reach *= sides;
        count += 1;
    }
    count
}

/// Separator for dice labels.
///
/// Faces of dice with fewer than ten sides are single digits, so labels
/// stay unambiguous without a separator.
pub fn separator_for(dice_sides: u64) -> &'static str {
    if dice_sides < 10 {
        ""
    } else {
        "-"
    }
}
