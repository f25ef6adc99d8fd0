//! Cooperative task scheduler
//!
//! Holds a dynamic, insertion-ordered set of suspendable behaviors and
//! resumes each exactly once per tick. A task does one tick's worth of
//! work per resumption and keeps its progress in its own fields; waiting
//! is expressed as counted no-op resumptions. Tasks spawned during a tick
//! are buffered and merged at the tail after the pass, so a freshly
//! spawned task first runs on the *next* tick - a bolt never acts twice
//! in its spawn tick.

use crate::canvas::Canvas;
use crate::sim::world::World;

/// What a task reports back after one resumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// More work to do; resume again next tick.
    Running,
    /// Permanently finished; the scheduler drops the task.
    Finished,
}

/// Everything a task may touch during one resumption: the shared world,
/// the render surface, and the spawn buffer for new tasks.
pub struct TickCx<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub world: &'a mut World,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl TickCx<'_> {
    /// Queue a task for registration at the end of the current tick.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.spawned.push(Box::new(task));
    }
}

/// A suspendable unit of behavior. The scheduler only ever calls
/// `resume`; it never inspects task internals. A panic inside `resume`
/// is a programming error and propagates.
pub trait Task {
    fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus;
}

/// The sole driver of the simulation.
#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to the live set.
    pub fn register(&mut self, task: impl Task + 'static) {
        self.tasks.push(Box::new(task));
    }

    /// Number of live tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Resume every live task once, in registration order, dropping
    /// finished ones and merging tasks spawned during the pass at the
    /// tail. Never blocks; real-time pacing is the host loop's job.
    pub fn run_tick(&mut self, canvas: &mut dyn Canvas, world: &mut World) {
        let mut spawned: Vec<Box<dyn Task>> = Vec::new();
        let mut cx = TickCx {
            canvas,
            world,
            spawned: &mut spawned,
        };
        self.tasks
            .retain_mut(|task| task.resume(&mut cx) == TaskStatus::Running);
        self.tasks.append(&mut spawned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::MockCanvas;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Appends its tag to a shared trace on every resumption, finishing
    /// after a set number of ticks.
    struct Tracer {
        tag: &'static str,
        trace: Rc<RefCell<Vec<&'static str>>>,
        remaining: u32,
    }

    impl Task for Tracer {
        fn resume(&mut self, _cx: &mut TickCx<'_>) -> TaskStatus {
            self.trace.borrow_mut().push(self.tag);
            self.remaining -= 1;
            if self.remaining == 0 {
                TaskStatus::Finished
            } else {
                TaskStatus::Running
            }
        }
    }

    /// Spawns a tracer on its first resumption, then idles.
    struct SpawnOnce {
        trace: Rc<RefCell<Vec<&'static str>>>,
        spawned: bool,
    }

    impl Task for SpawnOnce {
        fn resume(&mut self, cx: &mut TickCx<'_>) -> TaskStatus {
            self.trace.borrow_mut().push("spawner");
            if !self.spawned {
                self.spawned = true;
                cx.spawn(Tracer {
                    tag: "child",
                    trace: Rc::clone(&self.trace),
                    remaining: 2,
                });
            }
            TaskStatus::Running
        }
    }

    fn world() -> World {
        World::new(7, 10.0, 10.0)
    }

    #[test]
    fn resumes_in_registration_order() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        for tag in ["a", "b", "c"] {
            scheduler.register(Tracer {
                tag,
                trace: Rc::clone(&trace),
                remaining: 2,
            });
        }

        let mut canvas = MockCanvas::new(20, 40);
        let mut world = world();
        scheduler.run_tick(&mut canvas, &mut world);
        assert_eq!(*trace.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn finished_tasks_are_reaped() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        scheduler.register(Tracer {
            tag: "short",
            trace: Rc::clone(&trace),
            remaining: 1,
        });
        scheduler.register(Tracer {
            tag: "long",
            trace: Rc::clone(&trace),
            remaining: 3,
        });

        let mut canvas = MockCanvas::new(20, 40);
        let mut world = world();
        scheduler.run_tick(&mut canvas, &mut world);
        assert_eq!(scheduler.len(), 1);

        scheduler.run_tick(&mut canvas, &mut world);
        assert_eq!(*trace.borrow(), vec!["short", "long", "long"]);
    }

    #[test]
    fn spawned_tasks_first_run_on_the_next_tick() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        scheduler.register(SpawnOnce {
            trace: Rc::clone(&trace),
            spawned: false,
        });
        scheduler.register(Tracer {
            tag: "tail",
            trace: Rc::clone(&trace),
            remaining: 5,
        });

        let mut canvas = MockCanvas::new(20, 40);
        let mut world = world();

        // Spawn tick: the child must not act yet.
        scheduler.run_tick(&mut canvas, &mut world);
        assert_eq!(*trace.borrow(), vec!["spawner", "tail"]);

        // Next tick: the child runs, after everything registered before it.
        scheduler.run_tick(&mut canvas, &mut world);
        assert_eq!(
            *trace.borrow(),
            vec!["spawner", "tail", "spawner", "tail", "child"]
        );
    }

    #[test]
    fn empty_tick_leaves_world_untouched() {
        let mut scheduler = Scheduler::new();
        let mut canvas = MockCanvas::new(20, 40);
        let mut world = world();
        for _ in 0..50 {
            scheduler.run_tick(&mut canvas, &mut world);
        }
        assert!(scheduler.is_empty());
        assert_eq!(world.ship.row, 10.0);
        assert!(world.obstacles.is_empty());
    }
}
