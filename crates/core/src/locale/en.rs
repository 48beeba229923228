//! English strings.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    ("introduction", "Tutorial"),
    ("basicConcepts", "Let's build GPT: from scratch, in code, spelled out."),
    ("intermediateLevel", "Quiz: Building an LLM"),
    ("advancedLevel", "Deep Dive into LLMs like ChatGPT"),
    ("finalChallenge", "Advanced Quiz: Mastering LLMs"),
    ("nodeCompleted", "Node Completed"),
    ("alreadyCompleted", "You have already completed this level. Continue to the next one!"),
    ("congratulations", "Congratulations!"),
    ("completedLevel", "You have completed the level:"),
    ("allLevelsCompleted", "You have completed all levels!"),
    ("continue", "Continue"),
    ("close", "Close"),
    ("completePreviousNodes", "You must complete previous nodes first."),
    ("please_watch_video", "Please watch the full video"),
    ("video_completed_message", "Video completed! Click Continue to proceed"),
    ("tutorialTitle", "Welcome to the Tutorial"),
    ("tutorialStep1Title", "Node Path"),
    ("tutorialStep1Text", "This application allows you to progress through a learning node path."),
    ("tutorialStep2Title", "Complete Nodes"),
    ("tutorialStep2Text", "Tap an unlocked node to complete it and unlock the next level."),
    ("tutorialStep3Title", "Change Language"),
    ("tutorialStep3Text", "You can change the language using the button in the top right corner."),
    ("tutorialStep4Title", "Final Reward"),
    ("tutorialStep4Text", "When you complete all nodes, you will receive a special reward."),
    ("next", "Next"),
    ("previous", "Previous"),
    ("finish", "Finish"),
    ("skip", "Skip"),
    ("videoTitle", "Let's build GPT: from scratch, in code, spelled out."),
    ("advancedVideoTitle", "Deep Dive into LLMs like ChatGPT"),
    ("quiz_title", "Quiz: Building an LLM like ChatGPT"),
    ("advanced_quiz_title", "Advanced Quiz: Mastering LLMs"),
    ("quiz_question_counter", "Question {current} of {total}"),
    ("check_answer", "Check Answer"),
    ("try_again", "Try Again"),
    ("quiz_completed_title", "Quiz Completed!"),
    ("quiz_completed_message", "Congratulations! You have successfully completed the quiz. You can now advance to the next level."),
    ("quiz_incorrect_title", "Incorrect Answer"),
    ("quiz_incorrect_message", "Your answer is incorrect. Please try again."),
    ("quiz_too_many_errors_title", "Too Many Failed Attempts"),
    ("quiz_too_many_errors_message", "You have had too many failed attempts. You need to go back and watch the video again to reinforce your knowledge."),
    ("quiz_question_1", "What is the main component of a large language model (LLM) like GPT?"),
    ("quiz_q1_option_1", "A Convolutional Neural Network (CNN)"),
    ("quiz_q1_option_2", "A Recurrent Neural Network (RNN)"),
    ("quiz_q1_option_3", "A Transformer with attention mechanism"),
    ("quiz_q1_option_4", "A Hidden Markov Model (HMM)"),
    ("quiz_question_2", "What does \"GPT\" stand for in the context of language models?"),
    ("quiz_q2_option_1", "Generative Pre-trained Transformer"),
    ("quiz_q2_option_2", "General Purpose Text-generator"),
    ("quiz_q2_option_3", "Global Processing Technology"),
    ("quiz_q2_option_4", "Graph Pattern Transformer"),
    ("quiz_question_3", "What is the purpose of the \"tokenizer\" in a model like GPT?"),
    ("quiz_q3_option_1", "To check the grammar of the text"),
    ("quiz_q3_option_2", "To convert text into numerical tokens that the model can process"),
    ("quiz_q3_option_3", "To encrypt the text for better security"),
    ("quiz_q3_option_4", "To compress the text to reduce memory usage"),
    ("quiz_question_4", "What technique is used in GPT to predict the next word in a sequence?"),
    ("quiz_q4_option_1", "Linear regression"),
    ("quiz_q4_option_2", "Bayesian classification"),
    ("quiz_q4_option_3", "Decision trees"),
    ("quiz_q4_option_4", "Multi-head attention"),
    ("quiz_question_5", "What does \"fine-tuning\" mean in the context of language models?"),
    ("quiz_q5_option_1", "Optimizing the code for better speed"),
    ("quiz_q5_option_2", "Adjusting a pre-trained model for a specific task"),
    ("quiz_q5_option_3", "Reducing the size of the model"),
    ("quiz_q5_option_4", "Improving the user interface"),
    ("quiz_question_6", "What is one of the main challenges when training an LLM like GPT?"),
    ("quiz_q6_option_1", "Finding enough programmers"),
    ("quiz_q6_option_2", "Designing an attractive user interface"),
    ("quiz_q6_option_3", "The enormous amount of computational resources required"),
    ("quiz_q6_option_4", "Keeping the code compatible with different browsers"),
    ("advanced_quiz_question_1", "What technique is used to reduce the \"hallucination\" problem in LLMs?"),
    ("advanced_q1_option_1", "Increasing the model size"),
    ("advanced_q1_option_2", "Training with higher quality data and RLHF techniques"),
    ("advanced_q1_option_3", "Reducing temperature during generation"),
    ("advanced_q1_option_4", "All of the above"),
    ("advanced_quiz_question_2", "What is \"temperature\" in the context of text generation with LLMs?"),
    ("advanced_q2_option_1", "The processing speed of the model"),
    ("advanced_q2_option_2", "A parameter that controls the randomness of predictions"),
    ("advanced_q2_option_3", "The energy consumption during inference"),
    ("advanced_q2_option_4", "The amount of RAM memory used"),
    ("advanced_quiz_question_3", "What does RLHF stand for in the context of LLMs?"),
    ("advanced_q3_option_1", "Reinforcement Learning from Human Feedback"),
    ("advanced_q3_option_2", "Recursive Learning with Hidden Features"),
    ("advanced_q3_option_3", "Robust Language Handling Framework"),
    ("advanced_q3_option_4", "Responsive Language Heuristic Function"),
    ("advanced_quiz_question_4", "Which of these is NOT a common application of LLMs?"),
    ("advanced_q4_option_1", "Code generation"),
    ("advanced_q4_option_2", "Language translation"),
    ("advanced_q4_option_3", "Sentiment analysis"),
    ("advanced_q4_option_4", "Real-time 3D graphics rendering"),
    ("advanced_quiz_question_5", "What is a \"prompt\" in the context of LLMs?"),
    ("advanced_q5_option_1", "An error that occurs during training"),
    ("advanced_q5_option_2", "The text input provided to the model to generate a response"),
    ("advanced_q5_option_3", "The specialized hardware for running language models"),
    ("advanced_q5_option_4", "A method to compress the model"),
    ("advanced_quiz_question_6", "What technique allows LLMs to handle longer contexts?"),
    ("advanced_q6_option_1", "Reducing the vocabulary size"),
    ("advanced_q6_option_2", "Increasing the number of model layers"),
    ("advanced_q6_option_3", "Techniques like Attention with Linear Complexity or Sliding Window Attention"),
    ("advanced_q6_option_4", "Decreasing the dimension of embeddings"),
];
