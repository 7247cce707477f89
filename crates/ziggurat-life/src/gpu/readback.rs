use crate::error::{LifeError, LifeResult};

/// Copies `source` into `out` through the mappable `readback` buffer.
///
/// Blocks the calling thread until the copy has executed and the mapping is
/// available. `out` may be shorter than the buffers (trailing padding is
/// dropped).
pub(super) fn copy_to_host(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    source: &wgpu::Buffer,
    readback: &wgpu::Buffer,
    out: &mut [u8],
) -> LifeResult<()> {
    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("ziggurat life readback encoder"),
    });
    encoder.copy_buffer_to_buffer(source, 0, readback, 0, readback.size());
    let submission = queue.submit(std::iter::once(encoder.finish()));

    let slice = readback.slice(..);
    let (tx, rx) = std::sync::mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |r| {
        let _ = tx.send(r);
    });

    let polled = device.poll(wgpu::PollType::Wait {
        submission_index: Some(submission),
        timeout: None,
    });
    if let Err(e) = polled {
        // Cancels the pending map so the next readback can map again.
        readback.unmap();
        return Err(LifeError::readback(format!("device poll failed: {e}")));
    }

    match rx.recv() {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(LifeError::readback(format!("buffer map failed: {e}"))),
        Err(_) => {
            readback.unmap();
            return Err(LifeError::readback("map callback was dropped"));
        }
    }

    {
        let data = slice.get_mapped_range();
        out.copy_from_slice(&data[..out.len()]);
    }
    readback.unmap();

    Ok(())
}
