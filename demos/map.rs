use ferrite_saxpy::{try_transform_into, zip_into, Buffer, KernelResult};

fn main() -> KernelResult<()> {
    println!("Hello");

    let identity = |i: i32| {
        println!("Hello lambda");
        i
    };
    let _ = identity(3);

    let size = 10;
    let input = Buffer::from_data((0..size).collect::<Vec<i32>>());
    let mut output = Buffer::filled(size as usize, 0);

    // Vector function: double every element into a preallocated buffer.
    try_transform_into(&input, &mut output, |v| v * 2)?;
    for (i, v) in output.iter().enumerate() {
        println!("Result: #{i} = {v}");
    }

    // Map operator: allocate a fresh buffer from a per-element closure.
    let mapped = input.map(|v| v * 10);
    for (i, v) in mapped.iter().enumerate() {
        println!("Result: #{i} = {v}");
    }

    // Binary form: input + doubled, element by element.
    let mut summed = Buffer::filled(size as usize, 0);
    zip_into(&input, &output, &mut summed, |a, b| a + b);
    for (i, v) in summed.iter().enumerate() {
        println!("Sum: #{i} = {v}");
    }

    Ok(())
}
