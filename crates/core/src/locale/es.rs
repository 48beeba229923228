//! Spanish strings.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    ("introduction", "Tutorial"),
    ("basicConcepts", "Let's build GPT: from scratch, in code, spelled out."),
    ("intermediateLevel", "Quiz: Construyendo un LLM"),
    ("advancedLevel", "Deep Dive into LLMs like ChatGPT"),
    ("finalChallenge", "Quiz Avanzado: Dominando LLMs"),
    ("nodeCompleted", "Nodo Completado"),
    ("alreadyCompleted", "Ya has completado este nivel. ¡Continúa con el siguiente!"),
    ("congratulations", "¡Felicidades!"),
    ("completedLevel", "Has completado el nivel:"),
    ("allLevelsCompleted", "¡Has completado todos los niveles!"),
    ("continue", "Continuar"),
    ("close", "Cerrar"),
    ("completePreviousNodes", "Debes completar los nodos anteriores primero."),
    ("please_watch_video", "Por favor, mira el video completo"),
    ("video_completed_message", "¡Video completado! Haz clic en Continuar para avanzar"),
    ("tutorialTitle", "Bienvenido al Tutorial"),
    ("tutorialStep1Title", "Camino de Nodos"),
    ("tutorialStep1Text", "Esta aplicación te permite avanzar a través de un camino de nodos de aprendizaje."),
    ("tutorialStep2Title", "Completar Nodos"),
    ("tutorialStep2Text", "Toca un nodo desbloqueado para completarlo y desbloquear el siguiente nivel."),
    ("tutorialStep3Title", "Cambiar Idioma"),
    ("tutorialStep3Text", "Puedes cambiar el idioma usando el botón en la parte superior derecha."),
    ("tutorialStep4Title", "Recompensa Final"),
    ("tutorialStep4Text", "Al completar todos los nodos, recibirás una recompensa especial."),
    ("next", "Siguiente"),
    ("previous", "Anterior"),
    ("finish", "Finalizar"),
    ("skip", "Omitir"),
    ("videoTitle", "Let's build GPT: from scratch, in code, spelled out."),
    ("advancedVideoTitle", "Deep Dive into LLMs like ChatGPT"),
    ("quiz_title", "Quiz: Construyendo un LLM como ChatGPT"),
    ("advanced_quiz_title", "Quiz Avanzado: Dominando LLMs"),
    ("quiz_question_counter", "Pregunta {current} de {total}"),
    ("check_answer", "Verificar Respuesta"),
    ("try_again", "Intentar de nuevo"),
    ("quiz_completed_title", "¡Quiz Completado!"),
    ("quiz_completed_message", "¡Felicidades! Has completado el quiz correctamente. Ahora puedes avanzar al siguiente nivel."),
    ("quiz_incorrect_title", "Respuesta Incorrecta"),
    ("quiz_incorrect_message", "Tu respuesta es incorrecta. Por favor, intenta de nuevo."),
    ("quiz_too_many_errors_title", "Demasiados Intentos Fallidos"),
    ("quiz_too_many_errors_message", "Has tenido demasiados intentos fallidos. Debes volver a ver el video para reforzar tus conocimientos."),
    ("quiz_question_1", "¿Cuál es el componente principal de un modelo de lenguaje grande (LLM) como GPT?"),
    ("quiz_q1_option_1", "Una red neuronal convolucional (CNN)"),
    ("quiz_q1_option_2", "Una red neuronal recurrente (RNN)"),
    ("quiz_q1_option_3", "Un transformador con mecanismo de atención"),
    ("quiz_q1_option_4", "Un modelo de Markov oculto (HMM)"),
    ("quiz_question_2", "¿Qué significa \"GPT\" en el contexto de los modelos de lenguaje?"),
    ("quiz_q2_option_1", "Generative Pre-trained Transformer"),
    ("quiz_q2_option_2", "General Purpose Text-generator"),
    ("quiz_q2_option_3", "Global Processing Technology"),
    ("quiz_q2_option_4", "Graph Pattern Transformer"),
    ("quiz_question_3", "¿Cuál es el propósito del \"tokenizer\" en un modelo como GPT?"),
    ("quiz_q3_option_1", "Verificar la gramática del texto"),
    ("quiz_q3_option_2", "Convertir el texto en tokens numéricos que el modelo puede procesar"),
    ("quiz_q3_option_3", "Encriptar el texto para mayor seguridad"),
    ("quiz_q3_option_4", "Comprimir el texto para reducir el uso de memoria"),
    ("quiz_question_4", "¿Qué técnica se utiliza en GPT para predecir la siguiente palabra en una secuencia?"),
    ("quiz_q4_option_1", "Regresión lineal"),
    ("quiz_q4_option_2", "Clasificación bayesiana"),
    ("quiz_q4_option_3", "Árboles de decisión"),
    ("quiz_q4_option_4", "Atención de múltiples cabezas (Multi-head attention)"),
    ("quiz_question_5", "¿Qué significa \"fine-tuning\" en el contexto de los modelos de lenguaje?"),
    ("quiz_q5_option_1", "Optimizar el código para mayor velocidad"),
    ("quiz_q5_option_2", "Ajustar un modelo pre-entrenado para una tarea específica"),
    ("quiz_q5_option_3", "Reducir el tamaño del modelo"),
    ("quiz_q5_option_4", "Mejorar la interfaz de usuario"),
    ("quiz_question_6", "¿Cuál es uno de los principales desafíos al entrenar un LLM como GPT?"),
    ("quiz_q6_option_1", "Encontrar suficientes programadores"),
    ("quiz_q6_option_2", "Diseñar una interfaz de usuario atractiva"),
    ("quiz_q6_option_3", "La enorme cantidad de recursos computacionales necesarios"),
    ("quiz_q6_option_4", "Mantener el código compatible con diferentes navegadores"),
    ("advanced_quiz_question_1", "¿Qué técnica se utiliza para reducir el problema de \"alucinaciones\" en los LLMs?"),
    ("advanced_q1_option_1", "Aumentar el tamaño del modelo"),
    ("advanced_q1_option_2", "Entrenamiento con datos de mayor calidad y técnicas de RLHF"),
    ("advanced_q1_option_3", "Reducir la temperatura durante la generación"),
    ("advanced_q1_option_4", "Todas las anteriores"),
    ("advanced_quiz_question_2", "¿Qué es la \"temperatura\" en el contexto de generación de texto con LLMs?"),
    ("advanced_q2_option_1", "La velocidad de procesamiento del modelo"),
    ("advanced_q2_option_2", "Un parámetro que controla la aleatoriedad de las predicciones"),
    ("advanced_q2_option_3", "El consumo energético durante la inferencia"),
    ("advanced_q2_option_4", "La cantidad de memoria RAM utilizada"),
    ("advanced_quiz_question_3", "¿Qué significa RLHF en el contexto de los LLMs?"),
    ("advanced_q3_option_1", "Reinforcement Learning from Human Feedback"),
    ("advanced_q3_option_2", "Recursive Learning with Hidden Features"),
    ("advanced_q3_option_3", "Robust Language Handling Framework"),
    ("advanced_q3_option_4", "Responsive Language Heuristic Function"),
    ("advanced_quiz_question_4", "¿Cuál de estas NO es una aplicación común de los LLMs?"),
    ("advanced_q4_option_1", "Generación de código"),
    ("advanced_q4_option_2", "Traducción de idiomas"),
    ("advanced_q4_option_3", "Análisis de sentimiento"),
    ("advanced_q4_option_4", "Renderizado de gráficos 3D en tiempo real"),
    ("advanced_quiz_question_5", "¿Qué es un \"prompt\" en el contexto de los LLMs?"),
    ("advanced_q5_option_1", "Un error que ocurre durante el entrenamiento"),
    ("advanced_q5_option_2", "La entrada de texto que se proporciona al modelo para generar una respuesta"),
    ("advanced_q5_option_3", "El hardware especializado para ejecutar modelos de lenguaje"),
    ("advanced_q5_option_4", "Un método para comprimir el modelo"),
    ("advanced_quiz_question_6", "¿Qué técnica permite a los LLMs manejar contextos más largos?"),
    ("advanced_q6_option_1", "Reducir el tamaño del vocabulario"),
    ("advanced_q6_option_2", "Aumentar el número de capas del modelo"),
    ("advanced_q6_option_3", "Técnicas como Attention with Linear Complexity o Sliding Window Attention"),
    ("advanced_q6_option_4", "Disminuir la dimensión de los embeddings"),
];
