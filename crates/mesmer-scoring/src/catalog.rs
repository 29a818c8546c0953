//! The 36-question E&P battery.
//!
//! Questionnaire 1 (ids 1-18) probes physical suggestibility indicators and
//! questionnaire 2 (ids 19-36) emotional ones. Ids 1-2 and 19-20 carry 10
//! points; every other item carries 5. Texts, tooltips, and examples
//! reproduce the published questionnaire verbatim and travel to the
//! frontend untouched.

use std::sync::LazyLock;

use mesmer_core::models::question::{Category, Question, Questionnaire};

/// The full questionnaire with published-source metadata.
pub fn questionnaire() -> &'static Questionnaire {
    static QUESTIONNAIRE: LazyLock<Questionnaire> = LazyLock::new(|| Questionnaire {
        name: "HMI E&P Suggestibility Assessment".to_string(),
        version: "1.0".to_string(),
        methodology: crate::METHODOLOGY.to_string(),
        source: "Panorama Publishing, 2003".to_string(),
        questions: build_questions(),
    });
    &QUESTIONNAIRE
}

/// All 36 questions in id order.
pub fn questions() -> &'static [Question] {
    &questionnaire().questions
}

fn question(
    id: u8,
    questionnaire: u8,
    weight: u8,
    icon: &str,
    text: &str,
    tooltip: &str,
    example: &str,
) -> Question {
    Question {
        id,
        text: text.to_string(),
        category: if questionnaire == 1 {
            Category::Physical
        } else {
            Category::Emotional
        },
        questionnaire,
        weight,
        tooltip: tooltip.to_string(),
        example: Some(example.to_string()),
        icon: icon.to_string(),
    }
}

fn build_questions() -> Vec<Question> {
    vec![
        question(
            1,
            1,
            10,
            "moon",
            "Have you ever walked in your sleep during your adult life?",
            "Sleepwalking in adulthood indicates a strong connection between subconscious mind and physical body, suggesting direct physical response patterns.",
            "If you've experienced sleepwalking as an adult, your subconscious may directly control physical actions without conscious awareness.",
        ),
        question(
            2,
            1,
            10,
            "heart",
            "As a teenager, did you feel comfortable expressing your feelings to one or both of your parents?",
            "Comfort with direct emotional expression in formative years indicates literal, straightforward communication patterns.",
            "Being able to say 'I'm angry' or 'I love you' directly to parents suggests direct communication style.",
        ),
        question(
            3,
            1,
            5,
            "eye",
            "Do you have a tendency to look directly into a person's eyes and/or move closely to them when discussing an interesting subject?",
            "Direct eye contact and physical closeness indicate comfort with literal, face-to-face interaction.",
            "Maintaining steady eye contact during conversations shows direct engagement style.",
        ),
        question(
            4,
            1,
            5,
            "smile",
            "Do you feel that most people, when you first meet them, are uncritical of your appearance?",
            "Feeling accepted by others indicates confidence in direct social situations.",
            "Not worrying about judgment when meeting new people suggests comfort with direct interaction.",
        ),
        question(
            5,
            1,
            5,
            "user_plus",
            "In a group situation with people you have just met, would you feel comfortable drawing attention to yourself by initiating a conversation?",
            "Willingness to take direct action in social situations indicates physical confidence.",
            "Being the first to speak up in a group of strangers shows direct communication comfort.",
        ),
        question(
            6,
            1,
            5,
            "heart",
            "Do you feel comfortable holding hands or hugging someone you are in a relationship with in front of other people?",
            "Comfort with public physical affection indicates direct expression of feelings through body.",
            "Holding hands in public shows comfort with physical demonstration of emotions.",
        ),
        question(
            7,
            1,
            5,
            "zap",
            "When someone talks about feeling warm physically, do you begin to feel warm also?",
            "Physical empathy and immediate body response to suggestions indicates direct physical suggestibility.",
            "Feeling warm when someone describes heat shows immediate physical response to verbal cues.",
        ),
        question(
            8,
            1,
            5,
            "message_circle",
            "Do you tend to occasionally tune out when someone is talking to you because you are anxious to come up with your side, and, at times, not hear what the other person said?",
            "Focusing on immediate response rather than analysis indicates direct, action-oriented thinking.",
            "Preparing your response while someone talks shows immediate reaction patterns.",
        ),
        question(
            9,
            1,
            5,
            "book",
            "Do you feel that you learn and comprehend better by seeing and/or reading than by hearing?",
            "Visual learning preference indicates direct, literal information processing.",
            "Preferring to read instructions rather than listen to them shows direct learning style.",
        ),
        question(
            10,
            1,
            5,
            "help_circle",
            "In a new class or lecture situation, do you usually feel comfortable asking questions in front of the group?",
            "Comfort with direct questioning indicates confidence in straightforward communication.",
            "Raising your hand to ask questions shows comfort with direct interaction.",
        ),
        question(
            11,
            1,
            5,
            "message_circle",
            "When expressing your ideas, do you find it important to relate all the details leading up to the subject so the other person can understand it completely?",
            "Providing complete details indicates literal, thorough communication style.",
            "Giving step-by-step explanations shows preference for complete, direct information.",
        ),
        question(
            12,
            1,
            5,
            "users",
            "Do you enjoy relating to children?",
            "Comfort with children indicates ease with direct, uncomplicated interaction.",
            "Enjoying time with kids shows comfort with straightforward, literal communication.",
        ),
        question(
            13,
            1,
            5,
            "wind",
            "Do you find it easy to be at ease and comfortable with your body movements, even when faced with unfamiliar people and circumstances?",
            "Body confidence in new situations indicates strong mind-body connection.",
            "Moving naturally in new situations shows physical comfort and confidence.",
        ),
        question(
            14,
            1,
            5,
            "book",
            "Do you prefer reading fiction rather than non-fiction?",
            "Fiction preference can indicate comfort with direct emotional experience through stories.",
            "Enjoying novels shows engagement with direct narrative and emotional content.",
        ),
        question(
            15,
            1,
            5,
            "zap",
            "If you were to imagine sucking on a sour, bitter, juicy, yellow lemon, would your mouth water?",
            "Immediate physical response to mental imagery indicates strong mind-body connection.",
            "Salivating when thinking about lemons shows direct physical response to suggestions.",
        ),
        question(
            16,
            1,
            5,
            "star",
            "If you feel that you deserve to be complimented for something well done, do you feel comfortable if the compliment is given to you in front of other people?",
            "Comfort with public recognition indicates confidence in direct attention.",
            "Enjoying public praise shows comfort with direct acknowledgment.",
        ),
        question(
            17,
            1,
            5,
            "message_circle",
            "Do you feel that you are a good conversationalist?",
            "Confidence in communication indicates comfort with direct verbal interaction.",
            "Feeling skilled at conversation shows confidence in direct communication.",
        ),
        question(
            18,
            1,
            5,
            "smile",
            "Do you feel comfortable when complimentary attention is drawn to your physical body or appearance?",
            "Comfort with physical compliments indicates acceptance of direct body-focused attention.",
            "Enjoying compliments about appearance shows comfort with direct physical attention.",
        ),
        question(
            19,
            2,
            10,
            "moon",
            "Have you ever awakened in the middle of the night and felt that you could not move your body and/or talk?",
            "Sleep paralysis indicates mind-body disconnection characteristic of emotional suggestibility.",
            "Experiencing inability to move while conscious shows mental awareness separate from physical control.",
        ),
        question(
            20,
            2,
            10,
            "message_circle",
            "As a child, did you feel that you were more affected by your parents' tone of voice, than by what they actually said?",
            "Sensitivity to tone over words indicates inferential, analytical processing of communication.",
            "Reacting more to how something was said than what was said shows inferential learning.",
        ),
        question(
            21,
            2,
            5,
            "brain",
            "If someone you are associated with talks about a fear that you have experienced before, do you have a tendency to have an apprehensive or fearful feeling also?",
            "Mental empathy and analytical processing of others' emotions indicates emotional suggestibility.",
            "Feeling anxious when hearing about fears shows mental processing of emotional content.",
        ),
        question(
            22,
            2,
            5,
            "brain",
            "After having an argument with someone, do you have a tendency to dwell on what you could or should have said?",
            "Analytical reflection after events indicates inferential, thought-based processing.",
            "Replaying conversations and thinking of better responses shows analytical thinking style.",
        ),
        question(
            23,
            2,
            5,
            "wind",
            "Do you tend to occasionally tune out when someone is talking to you and, therefore, do not hear what was said because your mind drifts to something totally unrelated?",
            "Mental drift indicates internal focus and analytical thinking separate from immediate stimuli.",
            "Finding yourself thinking about other things during conversation shows internal mental focus.",
        ),
        question(
            24,
            2,
            5,
            "star",
            "Do you sometimes desire to be complimented for a job well done, but feel embarrassed or uncomfortable when complimented?",
            "Internal desire conflicting with external comfort indicates analytical self-awareness.",
            "Wanting praise but feeling awkward when receiving it shows internal conflict.",
        ),
        question(
            25,
            2,
            5,
            "users",
            "Do you often have a fear or dread of not being able to carry on a conversation with someone you've just met?",
            "Social anxiety and anticipatory thinking indicates analytical processing of interactions.",
            "Worrying about conversations before they happen shows anticipatory analytical thinking.",
        ),
        question(
            26,
            2,
            5,
            "eye",
            "Do you feel self-conscious when attention is drawn to your physical body or appearance?",
            "Discomfort with physical attention indicates mind-body disconnection.",
            "Feeling awkward about appearance compliments shows analytical self-consciousness.",
        ),
        question(
            27,
            2,
            5,
            "users",
            "If you had a choice, would you rather avoid being around children most of the time?",
            "Preference for complex over simple interaction indicates analytical nature.",
            "Preferring adult conversation shows preference for inferential communication.",
        ),
        question(
            28,
            2,
            5,
            "wind",
            "Do you feel that you are not relaxed or loose in body movements, especially when faced with unfamiliar people or circumstances?",
            "Physical tension in new situations indicates analytical processing creating body awareness.",
            "Feeling stiff or awkward in new situations shows mind-body disconnection under stress.",
        ),
        question(
            29,
            2,
            5,
            "book",
            "Do you prefer reading non-fiction rather than fiction?",
            "Preference for factual information indicates analytical, intellectual approach.",
            "Choosing educational books over novels shows analytical learning preference.",
        ),
        question(
            30,
            2,
            5,
            "coffee",
            "If someone describes a very bitter taste, do you have difficulty experiencing the physical feeling of it?",
            "Difficulty translating mental imagery to physical sensation indicates mind-body disconnection.",
            "Not feeling taste sensations from descriptions shows analytical vs. physical processing.",
        ),
        question(
            31,
            2,
            5,
            "brain",
            "Do you generally feel that you see yourself less favorably than others see you?",
            "Analytical self-criticism indicates inferential, thought-based self-perception.",
            "Being harder on yourself than others are shows analytical internal focus.",
        ),
        question(
            32,
            2,
            5,
            "heart",
            "Do you tend to feel awkward or self-conscious initiating touch (holding hands, kissing, etc.) with someone you are in a relationship with, in front of other people?",
            "Discomfort with public physical affection indicates analytical awareness of social context.",
            "Feeling awkward about PDA shows analytical processing of social appropriateness.",
        ),
        question(
            33,
            2,
            5,
            "help_circle",
            "In a new class or lecture situation, do you usually feel uncomfortable asking questions in front of the group, even though you may desire further explanation?",
            "Internal desire conflicting with external action indicates analytical self-consciousness.",
            "Wanting to ask but feeling too self-conscious shows analytical internal conflict.",
        ),
        question(
            34,
            2,
            5,
            "eye",
            "Do you feel uneasy if someone you have just met looks you directly in the eyes when talking to you, especially if the conversation is about you?",
            "Discomfort with direct eye contact indicates preference for less intense interaction.",
            "Finding direct eye contact uncomfortable shows analytical self-awareness.",
        ),
        question(
            35,
            2,
            5,
            "users",
            "In a group situation with people you have just met, would you feel uncomfortable drawing attention to yourself by initiating a conversation?",
            "Reluctance to initiate indicates analytical processing of social dynamics.",
            "Preferring to observe before participating shows analytical assessment of situations.",
        ),
        question(
            36,
            2,
            5,
            "heart",
            "If you are in a relationship, or are very close to someone, do you find it difficult or embarrassing to verbalize your love for them?",
            "Difficulty with direct emotional expression indicates inferential communication style.",
            "Finding it hard to say 'I love you' shows preference for showing vs. telling.",
        ),
    ]
}
