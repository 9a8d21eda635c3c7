//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod synthesis_engine;

pub use synthesis_engine::{
    SynthesisEnginePort, SynthesisError, UtteranceQuery, INTONATION_SCALE, PITCH_SCALE,
    SPEED_SCALE, VOLUME_SCALE,
};
