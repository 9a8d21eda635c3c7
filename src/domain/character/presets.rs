//! 内置人设表

use super::{Prosody, SpeakerId, VoiceProfile};

/// 内置人设
///
/// 前五个保留旧版数字编号 1-5（原 numeric-only 接口），之后是带韵律参数的人设。
pub fn builtin_profiles() -> Vec<VoiceProfile> {
    vec![
        // 旧版编号角色，引擎默认韵律
        VoiceProfile::new("shikoku_metan", "四国めたん（ノーマル）", SpeakerId::new(2), Prosody::default())
            .with_number(1)
            .with_description("落ち着いたお嬢様口調で起こしてくれます")
            .with_prompt("朝ですわよ。そろそろ起きてくださいまし。"),
        VoiceProfile::new("zundamon", "ずんだもん（ノーマル）", SpeakerId::new(3), Prosody::default())
            .with_number(2)
            .with_description("元気いっぱいのずんだの妖精")
            .with_prompt("朝なのだ！早く起きるのだ！"),
        VoiceProfile::new("kasukabe_tsumugi", "春日部つむぎ（ノーマル）", SpeakerId::new(8), Prosody::default())
            .with_number(3)
            .with_description("明るいギャル系の女の子")
            .with_prompt("おはよー！今日も一日がんばろっ！"),
        VoiceProfile::new("amehare_hau", "雨晴はう（ノーマル）", SpeakerId::new(10), Prosody::default())
            .with_number(4)
            .with_description("優しい看護師さん")
            .with_prompt("おはようございます。体調はいかがですか？"),
        VoiceProfile::new("namine_ritsu", "波音リツ（ノーマル）", SpeakerId::new(9), Prosody::default())
            .with_number(5)
            .with_description("クールな歌姫")
            .with_prompt("……朝よ。起きなさい。"),
        // 人设角色
        VoiceProfile::new("gentle_mother", "優しいお母さん", SpeakerId::new(20), Prosody::new(1.0, 0.0, 1.1, 0.95))
            .with_description("ゆっくり優しく起こしてくれるお母さん")
            .with_prompt("おはよう。朝ごはんできてるわよ。")
            .with_image("gentle_mother.png"),
        VoiceProfile::new("energetic_sister", "元気な妹", SpeakerId::new(1), Prosody::new(1.15, 0.03, 1.3, 1.0))
            .with_description("テンション高めで叩き起こしにくる妹")
            .with_prompt("お兄ちゃん、朝だよ！起きて起きてー！")
            .with_image("energetic_sister.png"),
        VoiceProfile::new("strict_teacher", "厳しい先生", SpeakerId::new(13), Prosody::new(1.05, -0.02, 0.9, 1.0))
            .with_description("遅刻は絶対に許さない担任の先生")
            .with_prompt("起床時間だ。一分たりとも遅れるな。")
            .with_image("strict_teacher.png"),
        VoiceProfile::new("cool_butler", "クールな執事", SpeakerId::new(11), Prosody::new(0.95, -0.03, 0.95, 1.0))
            .with_description("淡々と一日の予定を告げる執事")
            .with_prompt("お目覚めの時間でございます。本日のご予定をお伝えします。")
            .with_image("cool_butler.png"),
        VoiceProfile::new("sleepy_friend", "眠たげな幼なじみ", SpeakerId::new(8), Prosody::new(0.85, -0.01, 0.8, 0.9))
            .with_description("自分も眠そうな幼なじみ")
            .with_prompt("ふぁ……おはよ。一緒に起きよっか……")
            .with_image("sleepy_friend.png"),
    ]
}
