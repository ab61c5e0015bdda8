use ringbuffer::RingBuffer;

fn main() {
    // Keep the three most recent lines; reject anything past capacity.
    let mut recent = RingBuffer::new(3);

    for line in ["alpha", "beta", "gamma", "delta"] {
        match recent.push(line) {
            Ok(()) => println!("stored  {line}"),
            Err(err) => println!("rejected {} (buffer full)", err.into_inner()),
        }
    }

    println!("oldest stored: {:?}", recent.peek());

    for line in recent.pop_all() {
        println!("drained {line}");
    }

    assert!(recent.is_empty());
}
