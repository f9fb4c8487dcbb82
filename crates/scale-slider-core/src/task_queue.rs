//! Follow-up work posted for the next turn of the host event loop.
//!
//! Geometry capture must wait until the platform has finalized slot frames,
//! so bounds changes enqueue a task instead of reading frames inline.

use scale_slider_graphics::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderTask {
    CaptureGeometry { bounds: Rect },
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    queue: Vec<SliderTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, task: SliderTask) {
        self.queue.push(task);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(SliderTask),
    {
        for task in self.queue.drain(..) {
            handler(task);
        }
    }
}
