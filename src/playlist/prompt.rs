// Instruction sent as the system turn of every playlist request.

pub const PLAYLIST_LENGTH: usize = 7;

/// Leaves some creative range while keeping titles and artists factual.
pub const TEMPERATURE: f32 = 0.6;

/// Room for seven entries plus the mood label.
pub const MAX_TOKENS: u32 = 800;

pub const SYSTEM_PROMPT: &str = r#"Analyze the user's mood from the provided text.
Identify exactly one dominant mood, chosen from: Happy, Sad, Calm, Energetic, Angry, Anxious, Reflective, Neutral.
Then suggest exactly 7 distinct real songs (with their artists) that fit this mood. Prefer a variety of artists.

Respond ONLY with a single valid JSON object and no text outside it. The object has two keys:
- "mood": the detected mood, capitalized, one of the values above
- "playlist": an array of objects, each with string keys "name" and "artist"

Example format:
{"mood": "Happy", "playlist": [{"name": "Good Vibrations", "artist": "The Beach Boys"}, {"name": "Walking on Sunshine", "artist": "Katrina & The Waves"}, ...]}
"#;
