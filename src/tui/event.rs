//! 事件系统
//!
//! 后台线程轮询 crossterm，统一转发:
//! - 键盘输入
//! - 鼠标点击
//! - 窗口大小变化
//! - 定时器 tick

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// TUI 事件类型
#[derive(Debug)]
pub enum Event {
    /// 键盘事件
    Key(KeyEvent),

    /// 鼠标事件
    Mouse(MouseEvent),

    /// 窗口大小变化
    Resize(u16, u16),

    /// 定时器 tick（用于渲染刷新）
    Tick,

    /// 错误事件
    Error(String),
}

/// 事件处理器
pub struct EventHandler {
    /// 事件接收端
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// 创建新的事件处理器并启动事件循环
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                // 使用 poll 来实现非阻塞的事件检测
                let event = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                        Ok(CrosstermEvent::Mouse(mouse)) => Event::Mouse(mouse),
                        Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                        Ok(_) => continue, // 忽略其他事件
                        Err(e) => {
                            let _ = tx.send(Event::Error(e.to_string()));
                            break;
                        }
                    },
                    // 超时，发送 Tick 事件
                    Ok(false) => Event::Tick,
                    Err(e) => {
                        let _ = tx.send(Event::Error(e.to_string()));
                        break;
                    }
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    /// 获取下一个事件 (阻塞)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
