use dyn_array::{DynArray, DynArrayError};

fn main() -> Result<(), DynArrayError> {
    println!("=== DynArray Examples ===\n");

    example_growth()?;
    example_editing()?;

    Ok(())
}

fn example_growth() -> Result<(), DynArrayError> {
    println!("Example 1: Capacity doubling");

    let mut values = DynArray::new();
    let mut last_capacity = values.capacity();

    for i in 0..20u32 {
        values.push(i)?;
        if values.capacity() != last_capacity {
            println!(
                "  len {:>2} -> capacity {:>2}",
                values.len(),
                values.capacity()
            );
            last_capacity = values.capacity();
        }
    }
    println!();

    Ok(())
}

fn example_editing() -> Result<(), DynArrayError> {
    println!("Example 2: Insert, remove, resize");

    let mut queue = DynArray::from_slice(&["alpha", "gamma"])?;
    queue.insert(1, "beta")?;
    println!("  after insert: {:?}", queue.as_slice());

    queue.remove(0)?;
    println!("  after remove: {:?}", queue.as_slice());

    queue.resize(4, "padding")?;
    println!("  after resize: {:?}", queue.as_slice());

    Ok(())
}
